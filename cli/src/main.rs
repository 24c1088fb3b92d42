//! Barber shop service — CLI server
//!
//! Headless REST backend suitable for deployment as a systemd service,
//! Docker container, or standalone process.
//!
//! ```sh
//! # Run with default config (~/.config/barbershop/config.toml)
//! barbershop-service
//!
//! # Custom config path
//! barbershop-service --config /etc/barbershop/config.toml
//!
//! # Override the port
//! barbershop-service --port 9090
//!
//! # Validate config without starting
//! barbershop-service --check
//! ```

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info};

use barbershop::config::{AppConfig, StorageBackend, CONFIG_ENV_VAR};
use barbershop::server::{init_tracing, ServerHandle, ServerOptions};

/// Barber shop service — shops, barbers and their pictures over REST.
#[derive(Parser, Debug)]
#[command(
    name = "barbershop-service",
    version,
    about = "REST backend for barber shops, barbers and shop images",
    long_about = "Barber shop service: REST API for registering barber shops, \
                  their barbers, addresses and pictures.\n\n\
                  Default config: ~/.config/barbershop/config.toml"
)]
struct Cli {
    /// Path to the configuration file (TOML).
    #[arg(short, long, env = CONFIG_ENV_VAR)]
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
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // ── Load configuration ─────────────────────────────────────
    let config_path = cli.config.unwrap_or_else(barbershop::default_config_path);

    let (mut config, load_error) = match AppConfig::load(&config_path) {
        Ok(cfg) => (cfg, None),
        Err(e) if cli.check => {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        Err(e) => (AppConfig::default(), Some(e)),
    };

    // ── Apply CLI overrides ────────────────────────────────────
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(ref level) = cli.log_level {
        config.logging.level = level.clone();
    }

    // ── Config validation mode ─────────────────────────────────
    if cli.check {
        if let Err(e) = config.validate() {
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
        println!("✅ Configuration is valid");
        println!("   Config file : {}", config_path.display());
        println!("   API address : {}", config.server.address());
        println!("   Database    : {}", config.database.url);
        match config.storage.backend {
            StorageBackend::Local => {
                println!("   Storage     : local {}", config.storage.local_dir.display())
            }
            StorageBackend::S3 => println!(
                "   Storage     : s3 {}",
                config.storage.s3_bucket.as_deref().unwrap_or("-")
            ),
        }
        println!("   Log level   : {}", config.logging.level);
        return Ok(());
    }

    init_tracing(&config);
    match load_error {
        None => info!("Configuration loaded from {}", config_path.display()),
        Some(e) => {
            error!("Failed to load config from {}: {}", config_path.display(), e);
            error!("Using default configuration.");
        }
    }

    // ── Start server ───────────────────────────────────────────
    let handle = ServerHandle::start(ServerOptions {
        config,
        auto_migrate: !cli.no_migrate,
    })
    .await?;

    handle.install_signal_handler();
    info!("🚀 Press Ctrl+C to shutdown gracefully.");

    handle.shutdown_signal().wait().await;
    handle.wait().await;

    Ok(())
}
