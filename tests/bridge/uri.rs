use crate::common::Harness;
use serde_json::{json, Value};

const URI_CHANNEL: &str = "com.logger/uri";

#[test]
fn start_forwards_first_deep_link() {
    // Arrange
    let harness = Harness::new(&["--flag", "logger://abc/def", "logger://second"]);

    // Act
    harness.start().unwrap();

    // Assert
    assert_eq!(
        harness.messenger.sent_on(URI_CHANNEL, "handleUri"),
        vec![json!("logger://abc/def")]
    );
}

#[test]
fn deep_link_is_forwarded_only_once() {
    // Arrange
    let harness = Harness::started(&["logger://once"]);

    // Act
    harness.start().unwrap();
    harness.start().unwrap();

    // Assert
    assert_eq!(harness.messenger.sent_on(URI_CHANNEL, "handleUri").len(), 1);
}

#[test]
fn nothing_is_sent_without_a_deep_link() {
    let cases: [&[&str]; 3] = [&[], &["--flag", "otherarg"], &["https://example.com"]];

    for args in cases {
        // Arrange
        let harness = Harness::new(args);

        // Act
        harness.start().unwrap();

        // Assert
        assert_eq!(
            harness.messenger.sent_on(URI_CHANNEL, "handleUri"),
            Vec::<Value>::new(),
            "args: {:?}",
            args
        );
    }
}

#[test]
fn deep_link_follows_configured_scheme_and_prefix() {
    // Arrange
    let mut config = logger_desktop::config::ShellConfig::default();
    config.uri_scheme = "viewer".to_string();
    config.channel_prefix = "org.example".to_string();
    let harness = Harness::with_config(config, &["logger://ignored", "viewer://open"]);

    // Act
    harness.start().unwrap();

    // Assert
    assert_eq!(
        harness.messenger.sent_on("org.example/uri", "handleUri"),
        vec![json!("viewer://open")]
    );
}
