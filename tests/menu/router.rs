use anyhow::anyhow;
use logger_desktop::tray::router::{EventPattern, EventRoute, EventRouter, HandlerResult};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn exact_pattern_matches_only_exact_id() {
    // Arrange
    let pattern = EventPattern::Exact("app.quit".to_string());

    // Act
    let matches_quit = pattern.matches("app.quit");
    let matches_longer = pattern.matches("app.quit.now");
    let matches_shorter = pattern.matches("app.qui");
    let matches_other = pattern.matches("store.clear");

    // Assert
    assert!(matches_quit);
    assert!(!matches_longer);
    assert!(!matches_shorter);
    assert!(!matches_other);
}

#[test]
fn prefix_pattern_matches_namespace() {
    // Arrange
    let pattern = EventPattern::Prefix("connection.".to_string());

    // Act
    let matches_item = pattern.matches("connection.docs");
    let matches_bare = pattern.matches("connection.");
    let matches_partial = pattern.matches("connect");
    let matches_other = pattern.matches("extensions.loki");

    // Assert
    assert!(matches_item);
    assert!(matches_bare);
    assert!(!matches_partial);
    assert!(!matches_other);
}

#[test]
fn router_passes_event_id_to_first_matching_route() {
    // Arrange
    let first = Rc::new(RefCell::new(Vec::new()));
    let second_called = Rc::new(Cell::new(false));
    let first_clone = first.clone();
    let second_clone = second_called.clone();

    let router = EventRouter::new(vec![
        EventRoute {
            pattern: EventPattern::Prefix("connection.".to_string()),
            handler: Box::new(move |event_id| {
                first_clone.borrow_mut().push(event_id.to_string());
                Ok(HandlerResult::Continue)
            }),
        },
        EventRoute {
            pattern: EventPattern::Exact("connection.docs".to_string()),
            handler: Box::new(move |_| {
                second_clone.set(true);
                Ok(HandlerResult::Continue)
            }),
        },
    ]);

    // Act
    router.route("connection.docs").unwrap();
    router.route("connection.ws_viewer").unwrap();

    // Assert
    assert_eq!(*first.borrow(), vec!["connection.docs", "connection.ws_viewer"]);
    assert!(!second_called.get());
}

#[test]
fn router_returns_handler_result() {
    // Arrange
    let router = EventRouter::new(vec![EventRoute {
        pattern: EventPattern::Exact("app.quit".to_string()),
        handler: Box::new(|_| Ok(HandlerResult::Quit)),
    }]);

    let cases = [
        ("app.quit", HandlerResult::Quit),
        ("store.clear", HandlerResult::Continue),
        ("", HandlerResult::Continue),
    ];

    for (event_id, expected) in cases {
        // Act
        let result = router.route(event_id).unwrap();

        // Assert
        assert_eq!(result, expected, "event: {:?}", event_id);
    }
}

#[test]
fn router_propagates_handler_errors() {
    // Arrange
    let router = EventRouter::new(vec![EventRoute {
        pattern: EventPattern::Exact("store.clear".to_string()),
        handler: Box::new(|_| Err(anyhow!("store busy"))),
    }]);

    // Act
    let result = router.route("store.clear");

    // Assert
    assert_eq!(result.unwrap_err().to_string(), "store busy");
}

#[test]
fn empty_router_continues() {
    // Arrange
    let router = EventRouter::default();

    // Act
    let result = router.route("window.toggle").unwrap();

    // Assert
    assert_eq!(result, HandlerResult::Continue);
}
