//! Startup orchestration.
//!
//! # Responsibilities
//! - Initialize subsystems in dependency order
//! - Start background tasks (metrics exporter, table refresher)
//! - Bind the listener and serve until shutdown
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - The feed starts before the listener so the first table render
//!   usually has data
//! - Listener binds last (traffic only when ready)

use std::net::SocketAddr;

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::SiteConfig;
use crate::football::{FootballClient, FootballError, TableRefresher, TableStore};
use crate::http::HttpServer;
use crate::lifecycle::shutdown::Shutdown;
use crate::lifecycle::signals::shutdown_signal;
use crate::observability::metrics;

/// Errors that abort startup or serving.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid address {0:?}")]
    InvalidAddress(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("metrics exporter: {0}")]
    Metrics(#[from] metrics_exporter_prometheus::BuildError),

    #[error("football feed: {0}")]
    Feed(#[from] FootballError),

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Run the site until SIGINT/SIGTERM.
pub async fn run(config: SiteConfig) -> Result<(), StartupError> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config
            .observability
            .metrics_address
            .parse()
            .map_err(|_| StartupError::InvalidAddress(config.observability.metrics_address.clone()))?;
        metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let store = TableStore::new();

    let client = if config.football.enabled {
        Some(FootballClient::new(&config.football)?)
    } else {
        tracing::info!("Football feed disabled, teams table will stay empty");
        None
    };

    let refresher = client.clone().map(|client| {
        let refresher = TableRefresher::new(
            client,
            store.clone(),
            config.football.clone(),
            config.retries.clone(),
        );
        tokio::spawn(refresher.run(shutdown.subscribe()))
    });

    let listener = TcpListener::bind(&config.listener.bind_address)
        .await
        .map_err(|source| StartupError::Bind {
            addr: config.listener.bind_address.clone(),
            source,
        })?;

    let signal_shutdown = shutdown.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        signal_shutdown.trigger();
    });

    let server = HttpServer::new(config, store, client);
    let result = server.run(listener, shutdown.subscribe()).await;

    // Stop background tasks even if the server exited on its own
    shutdown.trigger();
    if let Some(handle) = refresher {
        if let Err(e) = handle.await {
            tracing::error!(error = %e, "Table refresher task failed");
        }
    }

    result.map_err(StartupError::Serve)
}
