use super::NativeWindow;
use crate::tray::builder::toggle_label;
use crate::tray::{ids, TrayRegistry};
use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Show/hide state of the main window, mirrored in the `window.toggle` tray label.
pub struct VisibilityToggle {
    state: Cell<Visibility>,
    window: Rc<dyn NativeWindow>,
    registry: Rc<TrayRegistry>,
    app_name: String,
}

impl VisibilityToggle {
    pub fn new(window: Rc<dyn NativeWindow>, registry: Rc<TrayRegistry>, app_name: impl Into<String>) -> Self {
        Self {
            state: Cell::new(Visibility::Visible),
            window,
            registry,
            app_name: app_name.into(),
        }
    }

    pub fn state(&self) -> Visibility {
        self.state.get()
    }

    pub fn toggle(&self) -> Visibility {
        let next = match self.state.get() {
            Visibility::Visible => {
                self.window.hide();
                Visibility::Hidden
            }
            Visibility::Hidden => {
                self.window.present();
                Visibility::Visible
            }
        };
        log::debug!("Window visibility -> {:?}", next);
        self.apply(next);
        next
    }

    /// Adopts the window's actual visibility.
    pub fn resync(&self) -> Visibility {
        let actual = if self.window.is_visible() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
        self.apply(actual);
        actual
    }

    pub fn label(&self) -> String {
        toggle_label(&self.app_name, self.state.get() == Visibility::Visible)
    }

    fn apply(&self, state: Visibility) {
        self.state.set(state);
        if !self.registry.set_label(ids::WINDOW_TOGGLE, &self.label()) {
            log::debug!("Toggle item not registered yet, label left as is");
        }
    }
}
