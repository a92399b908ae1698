//! SiteKeeper portal server
//!
//! Configured from a TOML file only: `$SITEKEEPER_CONFIG`, else
//! `~/.config/sitekeeper/config.toml`. Use `sitekeeper-cli` for flags.

use tracing::{error, info};

use sitekeeper::server::{init_tracing, ServerHandle, ServerOptions};
use sitekeeper::{default_config_path, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = default_config_path();
    let (config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config: {}", e);
            error!("Using default configuration.");
        }
    }

    let handle = ServerHandle::start(ServerOptions {
        config,
        create_default_admin: true,
    })
    .await?;

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
