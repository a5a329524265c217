pub mod channel;
pub mod config;
pub mod paths;
pub mod platform;
pub mod shell;
pub mod tray;
pub mod uri;
pub mod window;
