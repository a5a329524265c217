use crate::paths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Name shown in the tray toggle label ("Hide logger").
    pub app_name: String,
    /// Custom URI scheme forwarded from startup arguments, without `://`.
    pub uri_scheme: String,
    pub channel_prefix: String,
    pub window: WindowConfig,
    pub server: ServerEndpoints,
    pub extensions: ExtensionsConfig,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            app_name: "logger".to_string(),
            uri_scheme: "logger".to_string(),
            channel_prefix: "com.logger".to_string(),
            window: WindowConfig::default(),
            server: ServerEndpoints::default(),
            extensions: ExtensionsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
    pub use_header_bar: bool,
    pub icon_path: Option<PathBuf>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "app".to_string(),
            width: 1280,
            height: 720,
            use_header_bar: true,
            icon_path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ServerEndpoints {
    pub host: String,
    pub http_port: u16,
    pub udp_port: u16,
    pub tcp_port: u16,
}

impl Default for ServerEndpoints {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            http_port: 8080,
            udp_port: 8081,
            tcp_port: 8082,
        }
    }
}

impl ServerEndpoints {
    pub fn http_base(&self) -> String {
        format!("http://{}:{}", self.host, self.http_port)
    }

    pub fn http_events(&self) -> String {
        format!("{}/api/v2/events", self.http_base())
    }

    pub fn http_data(&self) -> String {
        format!("{}/api/v2/data", self.http_base())
    }

    pub fn ws_viewer(&self) -> String {
        format!("ws://{}:{}/ws", self.host, self.http_port)
    }

    pub fn udp_ingest(&self) -> String {
        format!("udp://{}:{}", self.host, self.udp_port)
    }

    pub fn tcp_ingest(&self) -> String {
        format!("tcp://{}:{}", self.host, self.tcp_port)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExtensionsConfig {
    pub loki: bool,
}

impl ShellConfig {
    pub fn load() -> Result<Self> {
        let path = paths::config_path()?;
        let mut config = Self::load_from(&path)?;
        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {:?}", path))?;
        let config: ShellConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config {:?}", path))?;
        Ok(config)
    }

    /// Applies the `LOGGER_*` overrides shared with the ingest server.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("LOGGER_BIND_ADDRESS").filter(|h| !h.is_empty()) {
            self.server.host = host;
        }
        override_port(&lookup, "LOGGER_PORT", &mut self.server.http_port);
        override_port(&lookup, "LOGGER_UDP_PORT", &mut self.server.udp_port);
        override_port(&lookup, "LOGGER_TCP_PORT", &mut self.server.tcp_port);
    }

    pub fn icon_path(&self) -> Result<PathBuf> {
        match &self.window.icon_path {
            Some(path) => Ok(path.clone()),
            None => paths::default_icon_path(),
        }
    }
}

fn override_port(lookup: &impl Fn(&str) -> Option<String>, key: &str, port: &mut u16) {
    let Some(raw) = lookup(key) else { return };
    match raw.trim().parse::<u16>() {
        Ok(value) if value > 0 => *port = value,
        _ => log::warn!("Ignoring invalid {}={:?}, keeping {}", key, raw, port),
    }
}
