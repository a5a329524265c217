//! Named method channels between the native shell and the embedded UI.
//!
//! Inbound calls arrive through [`ChannelHub::dispatch`] and are answered synchronously by the
//! handler registered for the channel. Outbound notifications go through a [`MethodChannel`],
//! which hands them to whatever [`BinaryMessenger`] the engine provides.

pub mod args;

pub use args::ArgError;

use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub const WINDOW_CHANNEL: &str = "window";
pub const TRAY_CHANNEL: &str = "tray";
pub const URI_CHANNEL: &str = "uri";

pub fn channel_name(prefix: &str, suffix: &str) -> String {
    format!("{}/{}", prefix, suffix)
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub args: Value,
}

impl MethodCall {
    pub fn new(method: impl Into<String>, args: Value) -> Self {
        Self {
            method: method.into(),
            args,
        }
    }

    pub fn without_args(method: impl Into<String>) -> Self {
        Self::new(method, Value::Null)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MethodResponse {
    Success {
        result: Value,
    },
    Error {
        code: String,
        message: String,
        details: Value,
    },
    NotImplemented,
}

impl MethodResponse {
    pub fn success(result: Value) -> Self {
        MethodResponse::Success { result }
    }

    pub fn null() -> Self {
        Self::success(Value::Null)
    }

    pub fn error(code: &str, message: impl Into<String>) -> Self {
        MethodResponse::Error {
            code: code.to_string(),
            message: message.into(),
            details: Value::Null,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, MethodResponse::Success { .. })
    }

    pub fn result(&self) -> Option<&Value> {
        match self {
            MethodResponse::Success { result } => Some(result),
            _ => None,
        }
    }
}

impl From<ArgError> for MethodResponse {
    fn from(err: ArgError) -> Self {
        MethodResponse::error(ArgError::CODE, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notification {
    pub channel: String,
    pub method: String,
    pub args: Value,
}

/// Fire-and-forget delivery of notifications to the embedded UI.
pub trait BinaryMessenger {
    fn send(&self, notification: Notification);
}

/// Answers inbound method calls for one channel.
pub trait MethodCallHandler {
    fn handle(&self, call: &MethodCall) -> MethodResponse;
}

#[derive(Clone)]
pub struct MethodChannel {
    name: String,
    messenger: Rc<dyn BinaryMessenger>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>, messenger: Rc<dyn BinaryMessenger>) -> Self {
        Self {
            name: name.into(),
            messenger,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke_method(&self, method: &str, args: Value) {
        log::debug!("Notify {}::{} {}", self.name, method, args);
        self.messenger.send(Notification {
            channel: self.name.clone(),
            method: method.to_string(),
            args,
        });
    }
}

/// Routing table from channel name to its inbound handler.
pub struct ChannelHub {
    messenger: Rc<dyn BinaryMessenger>,
    handlers: RefCell<HashMap<String, Rc<dyn MethodCallHandler>>>,
}

impl ChannelHub {
    pub fn new(messenger: Rc<dyn BinaryMessenger>) -> Self {
        Self {
            messenger,
            handlers: RefCell::new(HashMap::new()),
        }
    }

    pub fn channel(&self, name: &str) -> MethodChannel {
        MethodChannel::new(name, self.messenger.clone())
    }

    pub fn set_handler(&self, name: &str, handler: Rc<dyn MethodCallHandler>) {
        log::debug!("Registering handler for channel {}", name);
        self.handlers.borrow_mut().insert(name.to_string(), handler);
    }

    pub fn remove_handler(&self, name: &str) -> bool {
        self.handlers.borrow_mut().remove(name).is_some()
    }

    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }

    pub fn has_handler(&self, name: &str) -> bool {
        self.handlers.borrow().contains_key(name)
    }

    pub fn dispatch(&self, name: &str, call: &MethodCall) -> MethodResponse {
        // Released before the call so the handler may touch the hub again.
        let handler = self.handlers.borrow().get(name).cloned();
        let Some(handler) = handler else {
            log::debug!("No handler on channel {} for {}", name, call.method);
            return MethodResponse::NotImplemented;
        };

        let response = handler.handle(call);
        log::debug!("{}::{} -> {:?}", name, call.method, response);
        response
    }
}

/// Messenger used when no engine transport is attached; notifications are only logged.
pub struct LoggingMessenger;

impl BinaryMessenger for LoggingMessenger {
    fn send(&self, notification: Notification) {
        log::info!(
            "{}::{} {}",
            notification.channel,
            notification.method,
            notification.args
        );
    }
}
