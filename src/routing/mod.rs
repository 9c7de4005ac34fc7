//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation path (URI path component)
//!     → router.rs (ordered literal scan)
//!     → matcher.rs (exact comparison)
//!     → first literal match, else the wildcard fallback
//!     → ViewDescriptor
//!
//! Route Compilation (at startup):
//!     (pattern, view)[] + fallback view
//!     → reject duplicates / misplaced wildcard
//!     → freeze as immutable Router
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Deterministic and total: every path resolves to exactly one view
//! - First literal match wins; the wildcard is only reached on exhaustion

pub mod matcher;
pub mod router;

pub use router::{Route, RouteTableError, Router, SITE_ROUTES};
