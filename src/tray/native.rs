use super::builder::{MenuBackend, MenuNode, RealizedItem};
use super::registry::{ItemKind, NativeMenuItem};
use anyhow::{Context, Result};
use std::path::Path;
use std::rc::Rc;
use tray_icon::menu::{CheckMenuItem, IsMenuItem, Menu, MenuItem, PredefinedMenuItem, Submenu};
use tray_icon::{Icon, TrayIcon, TrayIconBuilder};

impl NativeMenuItem for MenuItem {
    fn label(&self) -> String {
        self.text()
    }

    fn set_label(&self, label: &str) {
        self.set_text(label);
    }

    fn is_enabled(&self) -> bool {
        MenuItem::is_enabled(self)
    }

    fn set_enabled(&self, enabled: bool) {
        MenuItem::set_enabled(self, enabled);
    }

    fn is_checked(&self) -> Option<bool> {
        None
    }

    fn set_checked(&self, _checked: bool) {}
}

impl NativeMenuItem for CheckMenuItem {
    fn label(&self) -> String {
        self.text()
    }

    fn set_label(&self, label: &str) {
        self.set_text(label);
    }

    fn is_enabled(&self) -> bool {
        CheckMenuItem::is_enabled(self)
    }

    fn set_enabled(&self, enabled: bool) {
        CheckMenuItem::set_enabled(self, enabled);
    }

    fn is_checked(&self) -> Option<bool> {
        Some(CheckMenuItem::is_checked(self))
    }

    fn set_checked(&self, checked: bool) {
        CheckMenuItem::set_checked(self, checked);
    }
}

enum Parent<'a> {
    Root(&'a Menu),
    Sub(&'a Submenu),
}

impl Parent<'_> {
    fn append(&self, item: &dyn IsMenuItem) -> Result<()> {
        match self {
            Parent::Root(menu) => menu.append(item)?,
            Parent::Sub(submenu) => submenu.append(item)?,
        }
        Ok(())
    }
}

/// System tray indicator backed by `tray-icon`. Dropping it removes the indicator.
pub struct TrayIconBackend {
    tooltip: String,
    icon: Option<Icon>,
    menu: Option<Menu>,
    tray: Option<TrayIcon>,
}

impl TrayIconBackend {
    pub fn new(tooltip: impl Into<String>, icon: Option<Icon>) -> Self {
        Self {
            tooltip: tooltip.into(),
            icon,
            menu: None,
            tray: None,
        }
    }
}

impl MenuBackend for TrayIconBackend {
    fn realize(&mut self, tree: &[MenuNode]) -> Result<Vec<RealizedItem>> {
        let menu = Menu::new();
        let mut realized = Vec::new();
        for node in tree {
            append_node(&Parent::Root(&menu), node, &mut realized)?;
        }
        self.menu = Some(menu);
        Ok(realized)
    }

    fn show(&mut self) -> Result<()> {
        let menu = self.menu.take().context("Tray menu was not realized")?;

        let mut builder = TrayIconBuilder::new()
            .with_menu(Box::new(menu))
            .with_tooltip(&self.tooltip);
        if let Some(icon) = self.icon.take() {
            builder = builder.with_icon(icon);
        }

        self.tray = Some(builder.build().context("Failed to create tray icon")?);
        Ok(())
    }
}

fn append_node(parent: &Parent<'_>, node: &MenuNode, realized: &mut Vec<RealizedItem>) -> Result<()> {
    match node {
        MenuNode::Action { id, label, enabled } => {
            let item = MenuItem::with_id(id.as_str(), label, *enabled, None);
            parent.append(&item)?;
            realized.push(RealizedItem {
                id: id.clone(),
                kind: ItemKind::Action,
                handle: Rc::new(item),
            });
        }
        MenuNode::Toggle { id, label, enabled, checked } => {
            let item = CheckMenuItem::with_id(id.as_str(), label, *enabled, *checked, None);
            parent.append(&item)?;
            realized.push(RealizedItem {
                id: id.clone(),
                kind: ItemKind::Toggle,
                handle: Rc::new(item),
            });
        }
        MenuNode::Submenu { label, children } => {
            let submenu = Submenu::new(label, true);
            for child in children {
                append_node(&Parent::Sub(&submenu), child, realized)?;
            }
            parent.append(&submenu)?;
        }
        MenuNode::Separator => {
            parent.append(&PredefinedMenuItem::separator())?;
        }
    }
    Ok(())
}

pub fn load_icon(path: &Path) -> Result<Icon> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read icon {:?}", path))?;
    decode_icon(&bytes)
}

pub fn decode_icon(png: &[u8]) -> Result<Icon> {
    let img = image::load_from_memory(png)
        .context("Failed to decode icon image")?
        .into_rgba8();
    let (width, height) = img.dimensions();
    Icon::from_rgba(img.into_raw(), width, height).context("Invalid icon pixel data")
}
