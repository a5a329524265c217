use super::ids;
use super::registry::{ItemKind, NativeMenuItem};
use crate::config::ShellConfig;
use anyhow::Result;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq)]
pub enum MenuNode {
    Action {
        id: String,
        label: String,
        enabled: bool,
    },
    Toggle {
        id: String,
        label: String,
        enabled: bool,
        checked: bool,
    },
    Submenu {
        label: String,
        children: Vec<MenuNode>,
    },
    Separator,
}

impl MenuNode {
    pub fn action(id: &str, label: impl Into<String>) -> Self {
        MenuNode::Action {
            id: id.to_string(),
            label: label.into(),
            enabled: true,
        }
    }

    pub fn toggle(id: &str, label: impl Into<String>, enabled: bool, checked: bool) -> Self {
        MenuNode::Toggle {
            id: id.to_string(),
            label: label.into(),
            enabled,
            checked,
        }
    }

    pub fn submenu(label: impl Into<String>, children: Vec<MenuNode>) -> Self {
        MenuNode::Submenu {
            label: label.into(),
            children,
        }
    }

    /// Identifier and kind of every clickable node, depth first.
    pub fn addressable(nodes: &[MenuNode]) -> Vec<(String, ItemKind)> {
        let mut out = Vec::new();
        collect_addressable(nodes, &mut out);
        out
    }
}

fn collect_addressable(nodes: &[MenuNode], out: &mut Vec<(String, ItemKind)>) {
    for node in nodes {
        match node {
            MenuNode::Action { id, .. } => out.push((id.clone(), ItemKind::Action)),
            MenuNode::Toggle { id, .. } => out.push((id.clone(), ItemKind::Toggle)),
            MenuNode::Submenu { children, .. } => collect_addressable(children, out),
            MenuNode::Separator => {}
        }
    }
}

pub fn toggle_label(app_name: &str, visible: bool) -> String {
    if visible {
        format!("Hide {}", app_name)
    } else {
        format!("Show {}", app_name)
    }
}

pub fn shell_menu(config: &ShellConfig) -> Vec<MenuNode> {
    let server = &config.server;

    let connection = vec![
        MenuNode::action(ids::CONNECTION_DOCS, "Open documentation"),
        MenuNode::action(ids::CONNECTION_HTTP_BASE, format!("HTTP: {}", server.http_base())),
        MenuNode::action(ids::CONNECTION_HTTP_EVENTS, format!("Events: {}", server.http_events())),
        MenuNode::action(ids::CONNECTION_HTTP_DATA, format!("Data: {}", server.http_data())),
        MenuNode::action(ids::CONNECTION_WS_VIEWER, format!("Viewer: {}", server.ws_viewer())),
        MenuNode::action(ids::CONNECTION_UDP_INGEST, format!("UDP ingest: {}", server.udp_ingest())),
        MenuNode::action(ids::CONNECTION_TCP_INGEST, format!("TCP ingest: {}", server.tcp_ingest())),
    ];

    // Grafana stays disabled until the viewer can drive it.
    let extensions = vec![
        MenuNode::toggle(ids::EXTENSIONS_LOKI, "Loki forwarding", true, config.extensions.loki),
        MenuNode::toggle(ids::EXTENSIONS_GRAFANA, "Grafana (coming soon)", false, false),
    ];

    vec![
        MenuNode::action(ids::WINDOW_TOGGLE, toggle_label(&config.app_name, true)),
        MenuNode::Separator,
        MenuNode::submenu("Connection", connection),
        MenuNode::Separator,
        MenuNode::submenu("Extensions", extensions),
        MenuNode::Separator,
        MenuNode::action(ids::STORE_CLEAR, "Clear log store"),
        MenuNode::action(ids::APP_QUIT, "Quit"),
    ]
}

pub struct RealizedItem {
    pub id: String,
    pub kind: ItemKind,
    pub handle: Rc<dyn NativeMenuItem>,
}

/// Turns a [`MenuNode`] tree into native menu entries.
pub trait MenuBackend {
    /// Creates native entries for `tree`, returning one handle per addressable node.
    fn realize(&mut self, tree: &[MenuNode]) -> Result<Vec<RealizedItem>>;

    /// Attaches the realized menu to its indicator and makes it visible.
    fn show(&mut self) -> Result<()>;
}
