use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "logger-desktop";

pub fn config_dir() -> Result<PathBuf> {
    dirs::config_dir()
        .context("Could not determine config directory")
        .map(|p| p.join(APP_DIR))
}

pub fn config_path() -> Result<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Bundle data directory, `data/` beside the running executable.
pub fn bundle_data_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Could not resolve executable path")?;
    let exe = exe.canonicalize().unwrap_or(exe);
    exe_data_dir(&exe).context("Executable has no parent directory")
}

pub fn default_icon_path() -> Result<PathBuf> {
    bundle_data_dir().map(|p| p.join("app_icon.png"))
}

fn exe_data_dir(exe: &Path) -> Option<PathBuf> {
    exe.parent().map(|dir| dir.join("data"))
}
