//! Field operations service: CLI server
//!
//! ```sh
//! # Run with default config (~/.config/field-ops/config.toml)
//! field-ops-service
//!
//! # Custom config path
//! field-ops-service --config /etc/field-ops/config.toml
//!
//! # Override the listen port
//! field-ops-service --port 8080
//!
//! # Validate config without starting
//! field-ops-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use fieldops::config::AppConfig;
use fieldops::server::{init_tracing, ServerHandle, ServerOptions};

/// Field operations backend: photos, leads and GPS tracking for field agents.
#[derive(Parser, Debug)]
#[command(
    name = "field-ops-service",
    version,
    about = "REST API for field agents: photos, leads and location tracking",
    long_about = "Field operations service: REST API for field agents.\n\n\
                  Default config: ~/.config/field-ops/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = "FIELD_OPS_CONFIG")]
    config: Option<PathBuf>,

    /// Override the REST API listen port.
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the log level (trace, debug, info, warn, error).
    #[arg(short, long)]
    log_level: Option<String>,

    /// Validate the configuration file and exit without starting the server.
    #[arg(long)]
    check: bool,

    /// Skip database migrations on startup.
    #[arg(long)]
    no_migrate: bool,

    /// Skip creating the configured admin user.
    #[arg(long)]
    no_admin: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(fieldops::default_config_path);

    let loaded = AppConfig::load(&config_path);
    let mut config = match &loaded {
        Ok(cfg) => cfg.clone(),
        Err(_) => AppConfig::default(),
    };

    // Log level override must be applied before tracing starts
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }
    init_tracing(&config);

    match loaded {
        Ok(_) => info!("Configuration loaded from {}", config_path.display()),
        Err(e) => {
            error!("Failed to load config: {}", e);
            error!("Using default configuration.");
        }
    }

    // ── Apply CLI overrides ───────────────────────────────────
    if let Some(port) = cli.port {
        info!("CLI override: port = {}", port);
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        info!("CLI override: log_level = {}", level);
    }

    // ── Config validation mode ────────────────────────────────
    if cli.check {
        println!("Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.listen_address());
        println!("   Database    : {}", config.database.url);
        println!("   Log level   : {}", config.logging.level);
        println!(
            "   Admin       : {}",
            config
                .admin
                .as_ref()
                .map(|a| a.email.as_str())
                .unwrap_or("(none)")
        );
        return Ok(());
    }

    // ── Start server ──────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
        create_default_admin: !cli.no_admin,
    })
    .await?;

    // Install OS signal handlers (SIGTERM, SIGINT)
    handle.install_signal_handler();

    info!("Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
