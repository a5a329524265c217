use crate::common::{FakeWindow, Harness};
use logger_desktop::channel::{MethodCall, MethodCallHandler, MethodResponse};
use logger_desktop::window::{NativeWindow, WindowCommandHandler};
use serde_json::{json, Value};
use std::rc::Rc;

fn handler_for(window: &Rc<FakeWindow>) -> WindowCommandHandler {
    WindowCommandHandler::new(window.clone(), Box::new(|| None))
}

fn call(handler: &WindowCommandHandler, method: &str, args: Value) -> MethodResponse {
    handler.handle(&MethodCall::new(method, args))
}

#[test]
fn maximize_toggles_between_states() {
    // Arrange
    let window = Rc::new(FakeWindow::new());
    let handler = handler_for(&window);

    // Act
    let first = call(&handler, "maximize", Value::Null);
    let after_first = call(&handler, "isMaximized", Value::Null);
    let second = call(&handler, "maximize", Value::Null);
    let after_second = call(&handler, "isMaximized", Value::Null);

    // Assert
    assert_eq!(first, MethodResponse::null());
    assert_eq!(after_first.result(), Some(&json!(true)));
    assert_eq!(second, MethodResponse::null());
    assert_eq!(after_second.result(), Some(&json!(false)));
}

#[test]
fn is_maximized_reports_native_state() {
    // Arrange
    let window = Rc::new(FakeWindow::new());
    let handler = handler_for(&window);

    for maximized in [false, true] {
        window.maximized.set(maximized);

        // Act
        let response = call(&handler, "isMaximized", Value::Null);

        // Assert
        assert_eq!(response, MethodResponse::success(json!(maximized)));
    }
}

#[test]
fn minimize_and_close_reach_the_window() {
    // Arrange
    let window = Rc::new(FakeWindow::new());
    let handler = handler_for(&window);

    // Act
    let minimize = call(&handler, "minimize", Value::Null);
    let close = call(&handler, "close", Value::Null);

    // Assert
    assert!(minimize.is_success());
    assert!(close.is_success());
    assert!(window.iconified.get());
    assert!(window.closed.get());
}

#[test]
fn always_on_top_targets_current_active_window() {
    // Arrange
    let own = Rc::new(FakeWindow::new());
    let active = Rc::new(FakeWindow::new());
    let active_for_lookup = active.clone();
    let handler = WindowCommandHandler::new(
        own.clone(),
        Box::new(move || Some(active_for_lookup.clone() as Rc<dyn NativeWindow>)),
    );

    // Act
    let response = call(&handler, "setAlwaysOnTop", json!(true));

    // Assert
    assert_eq!(response, MethodResponse::null());
    assert_eq!(active.keep_above.get(), Some(true));
    assert_eq!(own.keep_above.get(), None);
}

#[test]
fn always_on_top_falls_back_to_own_window() {
    // Arrange
    let window = Rc::new(FakeWindow::new());
    let handler = handler_for(&window);

    // Act
    call(&handler, "setAlwaysOnTop", json!(true));
    let on = window.keep_above.get();
    call(&handler, "setAlwaysOnTop", json!(false));

    // Assert
    assert_eq!(on, Some(true));
    assert_eq!(window.keep_above.get(), Some(false));
}

#[test]
fn non_bool_arguments_are_rejected() {
    // Arrange
    let window = Rc::new(FakeWindow::new());
    let handler = handler_for(&window);

    let calls = [
        ("setAlwaysOnTop", Value::Null),
        ("setAlwaysOnTop", json!("true")),
        ("setDecorated", json!(1)),
        ("setDecorated", json!({ "decorated": true })),
    ];

    for (method, args) in calls {
        // Act
        let response = call(&handler, method, args.clone());

        // Assert
        match response {
            MethodResponse::Error { code, message, .. } => {
                assert_eq!(code, "BAD_ARGS");
                assert_eq!(message, "Expected Bool");
            }
            other => panic!("{} {} -> {:?}", method, args, other),
        }
    }
    assert_eq!(window.keep_above.get(), None);
    assert_eq!(window.decorated.get(), None);
}

#[test]
fn set_decorated_prefers_client_side_titlebar() {
    // Arrange
    let window = Rc::new(FakeWindow::new().with_titlebar());
    let handler = handler_for(&window);

    // Act
    let response = call(&handler, "setDecorated", json!(false));

    // Assert
    assert!(response.is_success());
    assert_eq!(window.titlebar_visible(), Some(false));
    assert_eq!(window.decorated.get(), None);
}

#[test]
fn set_decorated_uses_window_decorations_without_titlebar() {
    // Arrange
    let window = Rc::new(FakeWindow::new());
    let handler = handler_for(&window);

    // Act
    let response = call(&handler, "setDecorated", json!(false));

    // Assert
    assert!(response.is_success());
    assert_eq!(window.decorated.get(), Some(false));
}

#[test]
fn start_drag_begins_move_at_pointer() {
    // Arrange
    let window = Rc::new(FakeWindow::new().with_pointer(320, 48));
    let handler = handler_for(&window);

    // Act
    let response = call(&handler, "startDrag", Value::Null);

    // Assert
    assert_eq!(response, MethodResponse::null());
    assert_eq!(window.drag.get(), Some((320, 48)));
}

#[test]
fn start_drag_without_pointer_still_succeeds() {
    // Arrange
    let window = Rc::new(FakeWindow::new());
    let handler = handler_for(&window);

    // Act
    let response = call(&handler, "startDrag", Value::Null);

    // Assert
    assert_eq!(response, MethodResponse::null());
    assert_eq!(window.drag.get(), None);
}

#[test]
fn unknown_methods_are_not_implemented() {
    // Arrange
    let window = Rc::new(FakeWindow::new());
    let handler = handler_for(&window);

    for method in ["fullscreen", "toggleVisibility", ""] {
        // Act
        let response = call(&handler, method, Value::Null);

        // Assert
        assert_eq!(response, MethodResponse::NotImplemented, "method: {:?}", method);
    }
}

#[test]
fn window_channel_is_routed_through_the_shell() {
    // Arrange
    let harness = Harness::new(&[]);
    let channel = harness.shell.window_channel();

    // Act
    let response = harness
        .shell
        .dispatch(&channel, &MethodCall::without_args("maximize"));

    // Assert
    assert_eq!(channel, "com.logger/window");
    assert!(response.is_success());
    assert!(harness.window.maximized.get());
}
