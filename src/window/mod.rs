pub mod visibility;

pub use visibility::{Visibility, VisibilityToggle};

use crate::channel::args::as_bool;
use crate::channel::{MethodCall, MethodCallHandler, MethodResponse};
use serde_json::Value;
use std::rc::Rc;

/// Operations the bridge needs from a toplevel window.
pub trait NativeWindow {
    fn set_keep_above(&self, above: bool);
    fn iconify(&self);
    fn is_maximized(&self) -> bool;
    fn maximize(&self);
    fn unmaximize(&self);
    fn close(&self);
    /// Shows or hides a client-side title bar; `false` when the window has none.
    fn set_titlebar_visible(&self, visible: bool) -> bool;
    fn set_decorated(&self, decorated: bool);
    /// Pointer position in root coordinates, if a pointer device is available.
    fn pointer_position(&self) -> Option<(i32, i32)>;
    fn begin_move_drag(&self, x: i32, y: i32);
    fn is_visible(&self) -> bool;
    fn hide(&self);
    /// Shows, raises and focuses the window.
    fn present(&self);
}

pub type ActiveWindowFn = Box<dyn Fn() -> Option<Rc<dyn NativeWindow>>>;

/// Inbound calls on the window channel.
pub struct WindowCommandHandler {
    window: Rc<dyn NativeWindow>,
    active_window: ActiveWindowFn,
    visibility: Option<Rc<VisibilityToggle>>,
}

impl WindowCommandHandler {
    pub fn new(window: Rc<dyn NativeWindow>, active_window: ActiveWindowFn) -> Self {
        Self {
            window,
            active_window,
            visibility: None,
        }
    }

    pub fn with_visibility(mut self, visibility: Rc<VisibilityToggle>) -> Self {
        self.visibility = Some(visibility);
        self
    }

    fn set_always_on_top(&self, args: &Value) -> MethodResponse {
        let above = match as_bool(args) {
            Ok(value) => value,
            Err(e) => return e.into(),
        };
        // The active window can change after setup, so it is looked up per call.
        let target = (self.active_window)().unwrap_or_else(|| self.window.clone());
        target.set_keep_above(above);
        MethodResponse::null()
    }

    fn set_decorated(&self, args: &Value) -> MethodResponse {
        let decorated = match as_bool(args) {
            Ok(value) => value,
            Err(e) => return e.into(),
        };
        if !self.window.set_titlebar_visible(decorated) {
            self.window.set_decorated(decorated);
        }
        MethodResponse::null()
    }

    fn toggle_maximize(&self) -> MethodResponse {
        if self.window.is_maximized() {
            self.window.unmaximize();
        } else {
            self.window.maximize();
        }
        MethodResponse::null()
    }

    fn start_drag(&self) -> MethodResponse {
        match self.window.pointer_position() {
            Some((x, y)) => self.window.begin_move_drag(x, y),
            None => log::warn!("startDrag: no pointer position available"),
        }
        MethodResponse::null()
    }

    fn toggle_visibility(&self) -> MethodResponse {
        let Some(visibility) = &self.visibility else {
            return MethodResponse::NotImplemented;
        };
        let state = visibility.toggle();
        MethodResponse::success(Value::Bool(state == Visibility::Visible))
    }
}

impl MethodCallHandler for WindowCommandHandler {
    fn handle(&self, call: &MethodCall) -> MethodResponse {
        match call.method.as_str() {
            "setAlwaysOnTop" => self.set_always_on_top(&call.args),
            "minimize" => {
                self.window.iconify();
                MethodResponse::null()
            }
            "maximize" => self.toggle_maximize(),
            "close" => {
                self.window.close();
                MethodResponse::null()
            }
            "isMaximized" => MethodResponse::success(Value::Bool(self.window.is_maximized())),
            "setDecorated" => self.set_decorated(&call.args),
            "startDrag" => self.start_drag(),
            "toggleVisibility" => self.toggle_visibility(),
            _ => MethodResponse::NotImplemented,
        }
    }
}
