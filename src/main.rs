//! ShareHub Server: short share links and link-unfurl previews.
//!
//! Main entry point that wires all crates together and starts the server.

use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt};

use sharehub_core::config::AppConfig;
use sharehub_core::error::AppError;

/// ShareHub share link resolution and preview server
#[derive(Debug, Parser)]
#[command(name = "sharehub-server", version, about, long_about = None)]
struct Cli {
    /// Directory holding `default.toml` and per-environment overlays
    #[arg(short, long, default_value = "config")]
    config_dir: String,

    /// Environment overlay to load (`{config_dir}/{env}.toml`)
    #[arg(short, long, default_value = "development")]
    env: String,

    /// Seed file for the in-memory store, overriding `store.seed_file`
    #[arg(long)]
    seed: Option<String>,

    /// Port to listen on, overriding `server.port`
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let config = match load_configuration(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Load configuration from files and environment, then apply CLI overrides
fn load_configuration(cli: &Cli) -> Result<AppConfig, AppError> {
    let mut config = AppConfig::load_from(&cli.config_dir, &cli.env)?;
    if let Some(seed) = &cli.seed {
        config.store.seed_file = seed.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting ShareHub v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(site = %config.site.url, route = %config.preview.long_url_route, "Site configured");

    let collaborators = sharehub_store::build_collaborators(&config)?;
    sharehub_api::app::run_server(config, collaborators).await
}
