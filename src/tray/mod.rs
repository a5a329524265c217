pub mod builder;
pub mod commands;
pub mod ids;
pub mod native;
pub mod registry;
pub mod router;

pub use builder::{MenuBackend, MenuNode, RealizedItem};
pub use commands::TrayCommandHandler;
pub use registry::{ItemKind, NativeMenuItem, TrayEntry, TrayRegistry};

use crate::channel::MethodChannel;
use anyhow::Result;
use once_cell::unsync::OnceCell;
use serde_json::{json, Value};
use std::cell::RefCell;
use std::rc::Rc;

pub const ON_ACTION: &str = "onAction";

/// Owns the tray menu: its registry of addressable items, the indicator backend, and the outbound
/// `onAction` notifications.
pub struct TrayBridge {
    registry: Rc<TrayRegistry>,
    channel: MethodChannel,
    backend: RefCell<Option<Box<dyn MenuBackend>>>,
    built: OnceCell<()>,
}

impl TrayBridge {
    pub fn new(registry: Rc<TrayRegistry>, channel: MethodChannel) -> Self {
        Self {
            registry,
            channel,
            backend: RefCell::new(None),
            built: OnceCell::new(),
        }
    }

    pub fn registry(&self) -> &Rc<TrayRegistry> {
        &self.registry
    }

    pub fn is_built(&self) -> bool {
        self.built.get().is_some()
    }

    /// Realizes `tree`, registers every addressable item, then shows the indicator.
    ///
    /// Returns `false` without touching the backend when the menu already exists.
    pub fn build(&self, tree: &[MenuNode], mut backend: Box<dyn MenuBackend>) -> Result<bool> {
        if self.is_built() {
            log::debug!("Tray menu already built");
            return Ok(false);
        }

        let items = backend.realize(tree)?;
        for item in items {
            self.registry.register(&item.id, item.kind, item.handle);
        }
        log::info!("Tray menu built with {} items", self.registry.len());

        let shown = backend.show();
        *self.backend.borrow_mut() = Some(backend);
        let _ = self.built.set(());
        shown.map(|_| true)
    }

    /// Emits `onAction` for a user activation of `id`.
    ///
    /// Returns `false` when the id is unknown or its item is muted by an ongoing `setChecked`.
    pub fn notify_activation(&self, id: &str) -> bool {
        let Some(entry) = self.registry.get(id) else {
            log::debug!("Activation for unregistered tray item: {}", id);
            return false;
        };
        if entry.is_suppressed() {
            log::debug!("Suppressed programmatic toggle: {}", id);
            return false;
        }

        self.channel.invoke_method(ON_ACTION, action_args(id, &entry));
        true
    }

    /// Releases every registered item, then the indicator itself.
    pub fn teardown(&self) {
        self.registry.clear();
        if self.backend.borrow_mut().take().is_some() {
            log::debug!("Tray indicator released");
        }
    }
}

fn action_args(id: &str, entry: &TrayEntry) -> Value {
    match (entry.kind(), entry.handle().is_checked()) {
        (ItemKind::Toggle, Some(checked)) => json!({ "id": id, "checked": checked }),
        _ => json!({ "id": id }),
    }
}
