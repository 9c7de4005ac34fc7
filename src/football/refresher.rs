//! Background refresh of the teams table.
//!
//! # Responsibilities
//! - Fetch the configured league season on a fixed interval
//! - Retry failed fetches with exponential backoff
//! - Publish successes; keep serving the previous snapshot on failure
//! - Exit on shutdown

use std::time::Duration;

use chrono::Utc;
use tokio::sync::broadcast;
use tokio::time;

use crate::config::{FootballConfig, RetryConfig};
use crate::football::client::FootballClient;
use crate::football::store::{TableSnapshot, TableStore};
use crate::football::types::FootballResult;
use crate::observability::metrics;
use crate::resilience::backoff::calculate_backoff;

pub struct TableRefresher {
    client: FootballClient,
    store: TableStore,
    config: FootballConfig,
    retry: RetryConfig,
}

impl TableRefresher {
    pub fn new(
        client: FootballClient,
        store: TableStore,
        config: FootballConfig,
        retry: RetryConfig,
    ) -> Self {
        Self {
            client,
            store,
            config,
            retry,
        }
    }

    /// Refresh immediately, then every `refresh_secs`, until shutdown.
    pub async fn run(self, mut shutdown: broadcast::Receiver<()>) {
        tracing::info!(
            league_id = self.config.league_id,
            season = self.config.season,
            interval_secs = self.config.refresh_secs,
            "Table refresher starting"
        );

        let mut ticker = time::interval(Duration::from_secs(self.config.refresh_secs));
        ticker.set_missed_tick_behavior(time::MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = shutdown.recv() => break,
            }
            tokio::select! {
                _ = self.refresh() => {}
                _ = shutdown.recv() => break,
            }
        }
        tracing::info!("Table refresher received shutdown signal, exiting loop");
    }

    /// One refresh cycle with retries. Returns true if a snapshot was published.
    pub async fn refresh(&self) -> bool {
        let max_attempts = self.retry.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            match self.fetch().await {
                Ok(snapshot) => {
                    metrics::record_refresh("success");
                    self.store.publish(snapshot);
                    return true;
                }
                Err(e) if attempt < max_attempts => {
                    let delay = calculate_backoff(attempt, self.retry.base_delay_ms, self.retry.max_delay_ms);
                    tracing::warn!(attempt, delay = ?delay, error = %e, "Teams fetch failed, retrying");
                    metrics::record_refresh("retry");
                    time::sleep(delay).await;
                }
                Err(e) => {
                    tracing::error!(
                        attempts = attempt,
                        error = %e,
                        "Teams fetch failed, keeping previous snapshot"
                    );
                    metrics::record_refresh("failure");
                    return false;
                }
            }
        }
    }

    async fn fetch(&self) -> FootballResult<TableSnapshot> {
        let teams = self.client.teams(self.config.league_id, self.config.season).await?;
        Ok(TableSnapshot {
            league_id: self.config.league_id,
            season: self.config.season,
            teams,
            fetched_at: Utc::now(),
        })
    }
}
