use super::registry::{ItemKind, TrayEntry, TrayRegistry};
use crate::channel::args::{as_map, require_bool, require_str};
use crate::channel::{ArgError, MethodCall, MethodCallHandler, MethodResponse};
use std::rc::Rc;

/// Inbound `setLabel` / `setEnabled` / `setChecked` calls on the tray channel.
pub struct TrayCommandHandler {
    registry: Rc<TrayRegistry>,
}

impl TrayCommandHandler {
    pub fn new(registry: Rc<TrayRegistry>) -> Self {
        Self { registry }
    }

    fn set_label(&self, call: &MethodCall) -> Result<(), ArgError> {
        let args = as_map(&call.args)?;
        let id = require_str(args, "id")?;
        let label = require_str(args, "label")?;

        if let Some(entry) = self.lookup(&call.method, id) {
            entry.handle().set_label(label);
        }
        Ok(())
    }

    fn set_enabled(&self, call: &MethodCall) -> Result<(), ArgError> {
        let args = as_map(&call.args)?;
        let id = require_str(args, "id")?;
        let enabled = require_bool(args, "enabled")?;

        if let Some(entry) = self.lookup(&call.method, id) {
            entry.handle().set_enabled(enabled);
        }
        Ok(())
    }

    fn set_checked(&self, call: &MethodCall) -> Result<(), ArgError> {
        let args = as_map(&call.args)?;
        let id = require_str(args, "id")?;
        let checked = require_bool(args, "checked")?;

        let Some(entry) = self.lookup(&call.method, id) else {
            return Ok(());
        };
        if entry.kind() != ItemKind::Toggle {
            log::warn!("setChecked on non-toggle tray item: {}", id);
            return Ok(());
        }

        let _guard = entry.suppress_events();
        entry.handle().set_checked(checked);
        Ok(())
    }

    // The UI and the tray can briefly disagree on which items exist, so a miss only logs.
    fn lookup(&self, method: &str, id: &str) -> Option<Rc<TrayEntry>> {
        let entry = self.registry.get(id);
        if entry.is_none() {
            log::warn!("{}: unknown tray item {}", method, id);
        }
        entry
    }
}

impl MethodCallHandler for TrayCommandHandler {
    fn handle(&self, call: &MethodCall) -> MethodResponse {
        let result = match call.method.as_str() {
            "setLabel" => self.set_label(call),
            "setEnabled" => self.set_enabled(call),
            "setChecked" => self.set_checked(call),
            _ => return MethodResponse::NotImplemented,
        };

        match result {
            Ok(()) => MethodResponse::null(),
            Err(e) => {
                log::warn!("Bad arguments for {}: {} ({})", call.method, e, call.args);
                e.into()
            }
        }
    }
}
