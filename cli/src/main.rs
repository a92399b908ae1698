//! SiteKeeper CLI server
//!
//! ```sh
//! # Run with default config (~/.config/sitekeeper/config.toml)
//! sitekeeper-cli
//!
//! # Custom config path and port
//! sitekeeper-cli --config /etc/sitekeeper/config.toml --port 8080
//!
//! # Validate config without starting
//! sitekeeper-cli --check
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use sitekeeper::config::{AppConfig, CONFIG_ENV_VAR};
use sitekeeper::server::{init_tracing, ServerHandle, ServerOptions};

/// SiteKeeper website-management portal API server.
#[derive(Parser, Debug)]
#[command(
    name = "sitekeeper-cli",
    version,
    about = "Website-management portal REST API",
    long_about = "SiteKeeper: REST API for clients and admins managing websites, \
                  change requests, invoices and uploads.\n\n\
                  Default config: ~/.config/sitekeeper/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
    config: Option<PathBuf>,

    /// Override the listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the directory holding the JSON collections.
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip seeding the default admin user.
    #[arg(long)]
    no_admin: bool,
}

impl Cli {
    fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(ref dir) = self.data_dir {
            config.storage.data_dir = dir.clone();
        }
        if let Some(ref level) = self.log_level {
            config.logging.level = level.clone();
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(sitekeeper::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };
    cli.apply_overrides(&mut config);

    if cli.check {
        return check(&config_path, &config, load_error.map(|e| e.to_string()));
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config: {}", e);
            error!("Using default configuration.");
        }
    }

    let handle = match ServerHandle::start(ServerOptions {
        config,
        create_default_admin: !cli.no_admin,
    })
    .await
    {
        Ok(handle) => handle,
        Err(e) => {
            error!("Failed to start server: {}", e);
            return ExitCode::FAILURE;
        }
    };

    handle.install_signal_handler();
    info!("Press Ctrl+C to shut down gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    ExitCode::SUCCESS
}

fn check(path: &std::path::Path, config: &AppConfig, load_error: Option<String>) -> ExitCode {
    let mut problems = config.validate();
    if let Some(e) = load_error {
        problems.insert(0, e);
    }

    println!("Config file : {}", path.display());
    println!("Listen      : {}", config.listen_addr());
    println!("Data dir    : {}", config.storage.data_dir.display());
    println!("Log level   : {}", config.logging.level);

    if problems.is_empty() {
        println!("Configuration is valid");
        ExitCode::SUCCESS
    } else {
        for problem in &problems {
            eprintln!("  - {}", problem);
        }
        eprintln!("Configuration has {} problem(s)", problems.len());
        ExitCode::FAILURE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_the_file() {
        let cli = Cli::parse_from([
            "sitekeeper-cli",
            "--port",
            "9090",
            "--data-dir",
            "/tmp/sk",
            "--log-level",
            "debug",
            "--no-admin",
        ]);
        let mut config = AppConfig::default();
        cli.apply_overrides(&mut config);

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/sk"));
        assert_eq!(config.logging.level, "debug");
        assert!(cli.no_admin);
    }
}
