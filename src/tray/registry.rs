use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Native menu entry as seen by the bridge.
///
/// Implementations mutate through `&self`; native toolkits keep widget state behind their own
/// reference counting.
pub trait NativeMenuItem {
    fn label(&self) -> String;
    fn set_label(&self, label: &str);
    fn is_enabled(&self) -> bool;
    fn set_enabled(&self, enabled: bool);
    /// `None` for items without a check state.
    fn is_checked(&self) -> Option<bool>;
    fn set_checked(&self, checked: bool);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Action,
    Toggle,
}

pub struct TrayEntry {
    kind: ItemKind,
    handle: Rc<dyn NativeMenuItem>,
    suppressed: Cell<bool>,
}

impl TrayEntry {
    pub fn new(kind: ItemKind, handle: Rc<dyn NativeMenuItem>) -> Self {
        Self {
            kind,
            handle,
            suppressed: Cell::new(false),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn handle(&self) -> &dyn NativeMenuItem {
        self.handle.as_ref()
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed.get()
    }

    /// Silences native toggle events for this entry until the guard drops.
    pub fn suppress_events(&self) -> SuppressGuard<'_> {
        self.suppressed.set(true);
        SuppressGuard {
            flag: &self.suppressed,
        }
    }
}

pub struct SuppressGuard<'a> {
    flag: &'a Cell<bool>,
}

impl Drop for SuppressGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}

/// Owning map from action identifier to its menu entry.
#[derive(Default)]
pub struct TrayRegistry {
    entries: RefCell<HashMap<String, Rc<TrayEntry>>>,
}

impl TrayRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handle` under `id`, dropping any entry previously held for it.
    pub fn register(&self, id: &str, kind: ItemKind, handle: Rc<dyn NativeMenuItem>) {
        let entry = Rc::new(TrayEntry::new(kind, handle));
        let replaced = self.entries.borrow_mut().insert(id.to_string(), entry);
        if replaced.is_some() {
            log::debug!("Replaced tray entry: {}", id);
        }
    }

    pub fn get(&self, id: &str) -> Option<Rc<TrayEntry>> {
        self.entries.borrow().get(id).cloned()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.borrow().contains_key(id)
    }

    pub fn set_label(&self, id: &str, label: &str) -> bool {
        let Some(entry) = self.get(id) else {
            return false;
        };
        entry.handle().set_label(label);
        true
    }

    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.entries.borrow().keys().cloned().collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn clear(&self) {
        let drained: Vec<_> = self.entries.borrow_mut().drain().collect();
        log::debug!("Released {} tray entries", drained.len());
    }
}
