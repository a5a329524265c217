//! Action identifiers shared with the embedded UI. Renaming any of these needs the same change on
//! the UI side.

pub const WINDOW_TOGGLE: &str = "window.toggle";

pub const CONNECTION_DOCS: &str = "connection.docs";
pub const CONNECTION_HTTP_BASE: &str = "connection.http_base";
pub const CONNECTION_HTTP_EVENTS: &str = "connection.http_events";
pub const CONNECTION_HTTP_DATA: &str = "connection.http_data";
pub const CONNECTION_WS_VIEWER: &str = "connection.ws_viewer";
pub const CONNECTION_UDP_INGEST: &str = "connection.udp_ingest";
pub const CONNECTION_TCP_INGEST: &str = "connection.tcp_ingest";

pub const EXTENSIONS_LOKI: &str = "extensions.loki";
pub const EXTENSIONS_GRAFANA: &str = "extensions.grafana";

pub const STORE_CLEAR: &str = "store.clear";
pub const APP_QUIT: &str = "app.quit";

pub const ALL: &[&str] = &[
    WINDOW_TOGGLE,
    CONNECTION_DOCS,
    CONNECTION_HTTP_BASE,
    CONNECTION_HTTP_EVENTS,
    CONNECTION_HTTP_DATA,
    CONNECTION_WS_VIEWER,
    CONNECTION_UDP_INGEST,
    CONNECTION_TCP_INGEST,
    EXTENSIONS_LOKI,
    EXTENSIONS_GRAFANA,
    STORE_CLEAR,
    APP_QUIT,
];
