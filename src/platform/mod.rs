#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub use linux::{run, GtkNativeWindow, APPLICATION_ID};

#[cfg(not(target_os = "linux"))]
pub fn run(_config: crate::config::ShellConfig, _args: Vec<String>) -> anyhow::Result<()> {
    anyhow::bail!("logger-desktop needs a GTK window backend, which is only available on Linux")
}
