//! Matchday site server.
//!
//! ```text
//!  Browser ──GET /path──▶ http::server ──path──▶ routing::Router
//!                              │                       │
//!                              │               ViewDescriptor
//!                              ▼                       ▼
//!                        /api, /health          views::ViewRegistry
//!                              │                       │
//!                              ▼                       ▼
//!                      football::TableStore ◀── TableRefresher ◀── football API
//! ```

use std::path::PathBuf;

use clap::Parser;

use matchday::config::{self, validate_config, ConfigError};
use matchday::lifecycle::startup;
use matchday::observability::logging;

#[derive(Parser)]
#[command(name = "matchday", version)]
#[command(about = "Football statistics site server", long_about = None)]
struct Args {
    /// TOML configuration file (defaults are used when omitted).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let mut config = config::load(args.config.as_deref())?;
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    logging::init(&config.observability)?;

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "matchday starting");
    tracing::info!(
        bind_address = %config.listener.bind_address,
        football_enabled = config.football.enabled,
        league_id = config.football.league_id,
        season = config.football.season,
        metrics_enabled = config.observability.metrics_enabled,
        "Configuration loaded"
    );

    startup::run(config).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
