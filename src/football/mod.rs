//! Football data feed backing the teams table.
//!
//! # Data Flow
//! ```text
//! TableRefresher (interval)
//!     → client.rs (GET /teams, rapidapi headers)
//!     → types.rs (flatten nested JSON into rows)
//!     → store.rs (publish snapshot via ArcSwap)
//!     → views::TableView reads the latest snapshot on render
//!
//! /api/leagues
//!     → client.rs (GET /leagues)
//!     → one row per league season
//! ```
//!
//! # Design Decisions
//! - The router never touches this module; only the table view and the
//!   data API handlers do
//! - Failed refreshes never clear a good snapshot

pub mod client;
pub mod refresher;
pub mod store;
pub mod types;

pub use client::FootballClient;
pub use refresher::TableRefresher;
pub use store::{TableSnapshot, TableStore};
pub use types::{FootballError, FootballResult, LeagueSeason, TeamRow};
