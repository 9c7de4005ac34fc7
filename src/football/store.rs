//! Latest teams table snapshot.

use std::sync::Arc;

use arc_swap::ArcSwapOption;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::football::types::TeamRow;
use crate::observability::metrics;

/// Immutable copy of one successful teams fetch.
#[derive(Debug, Clone, Serialize)]
pub struct TableSnapshot {
    pub league_id: u32,
    pub season: u16,
    pub teams: Vec<TeamRow>,
    pub fetched_at: DateTime<Utc>,
}

/// Shared holder for the current snapshot.
///
/// Readers get an `Arc` to whatever was last published and never block
/// the writer. Cloning the store shares the same slot.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    inner: Arc<ArcSwapOption<TableSnapshot>>,
}

impl TableStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current snapshot, if any fetch has succeeded yet.
    pub fn load(&self) -> Option<Arc<TableSnapshot>> {
        self.inner.load_full()
    }

    /// Replace the current snapshot.
    pub fn publish(&self, snapshot: TableSnapshot) {
        metrics::record_table_rows(snapshot.teams.len());
        tracing::info!(
            league_id = snapshot.league_id,
            season = snapshot.season,
            teams = snapshot.teams.len(),
            "Teams table updated"
        );
        self.inner.store(Some(Arc::new(snapshot)));
    }
}
