use anyhow::Result;
use logger_desktop::config::ShellConfig;
use logger_desktop::{platform, uri};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .init();

    log::info!("Starting Logger desktop shell...");

    let config = match ShellConfig::load() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Failed to load config, using defaults: {:#}", e);
            ShellConfig::default()
        }
    };
    log::debug!("Ingest server at {}", config.server.http_base());

    platform::run(config, uri::startup_args())?;

    log::info!("Logger desktop shell exited");
    Ok(())
}
