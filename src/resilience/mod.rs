//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Call to the football API:
//!     → request timeout (set on the HTTP client)
//!     → On failure: backoff.rs (exponential delay with jitter)
//!     → retry until the attempt budget is spent
//! ```
//!
//! # Design Decisions
//! - Every external call has a deadline
//! - Jitter spreads retries so restarts do not stampede the API

pub mod backoff;
