//! Matchday: a football statistics site.
//!
//! Every page request is resolved by a fixed route table to exactly one
//! view (home, Premier League teams table, or not-found) and rendered to
//! HTML. The teams table is fed in the background from a football data API.

pub mod config;
pub mod football;
pub mod http;
pub mod lifecycle;
pub mod navigation;
pub mod observability;
pub mod resilience;
pub mod routing;
pub mod security;
pub mod views;

pub use config::SiteConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use navigation::{mount_message, Navigator};
pub use routing::Router;
pub use views::ViewDescriptor;
