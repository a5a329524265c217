use crate::channel::MethodChannel;
use serde_json::Value;
use std::cell::Cell;

pub const HANDLE_URI: &str = "handleUri";

/// Startup arguments without the binary name.
pub fn startup_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

/// Forwards the first deep-link argument to the embedded UI, once per process.
pub struct UriForwarder {
    prefix: String,
    forwarded: Cell<bool>,
}

impl UriForwarder {
    pub fn new(scheme: &str) -> Self {
        Self {
            prefix: format!("{}://", scheme),
            forwarded: Cell::new(false),
        }
    }

    pub fn find<'a>(&self, args: &'a [String]) -> Option<&'a str> {
        args.iter()
            .map(String::as_str)
            .find(|arg| arg.starts_with(&self.prefix))
    }

    pub fn forward(&self, args: &[String], channel: &MethodChannel) -> Option<String> {
        if self.forwarded.get() {
            return None;
        }
        let uri = self.find(args)?.to_string();

        log::info!("Forwarding startup URI: {}", uri);
        self.forwarded.set(true);
        channel.invoke_method(HANDLE_URI, Value::String(uri.clone()));
        Some(uri)
    }
}
