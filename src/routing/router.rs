//! Route lookup.
//!
//! # Responsibilities
//! - Store the compiled route table
//! - Resolve a navigation path to exactly one view descriptor
//!
//! # Design Decisions
//! - Immutable after construction (shared via Arc without locks)
//! - O(n) exact scan, n = number of literal routes
//! - The wildcard fallback is kept outside the scan list so it can only
//!   ever be evaluated last

use std::collections::HashSet;

use thiserror::Error;

use crate::routing::matcher::{ExactMatcher, Matcher, WildcardMatcher};
use crate::views::ViewDescriptor;

/// Literal routes served by the site, in evaluation order.
pub const SITE_ROUTES: [(&str, ViewDescriptor); 3] = [
    ("/", ViewDescriptor::Home),
    ("/home", ViewDescriptor::Home),
    ("/premier-league/teams", ViewDescriptor::Table),
];

/// Errors raised while compiling a route table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteTableError {
    /// Two literal routes share a pattern.
    #[error("duplicate route pattern: {0}")]
    DuplicatePattern(String),

    /// The wildcard may only appear as the fallback.
    #[error("wildcard pattern must be the fallback route")]
    MisplacedWildcard,

    /// Literal patterns must be absolute paths.
    #[error("route pattern must start with '/': {0:?}")]
    InvalidPattern(String),
}

/// A compiled route: a matcher plus the view it selects.
#[derive(Debug)]
pub struct Route {
    matcher: Box<dyn Matcher>,
    view: ViewDescriptor,
}

impl Route {
    /// The pattern as written in the table.
    pub fn pattern(&self) -> &str {
        self.matcher.pattern()
    }

    /// The view this route mounts.
    pub fn view(&self) -> ViewDescriptor {
        self.view
    }
}

/// Resolves navigation paths to views.
#[derive(Debug)]
pub struct Router {
    routes: Vec<Route>,
    fallback: Route,
}

impl Router {
    /// Compile a route table, checking that every path maps to exactly one route.
    pub fn new(
        table: &[(&str, ViewDescriptor)],
        fallback: ViewDescriptor,
    ) -> Result<Self, RouteTableError> {
        let mut seen = HashSet::new();
        for (pattern, _) in table {
            if *pattern == WildcardMatcher::PATTERN {
                return Err(RouteTableError::MisplacedWildcard);
            }
            if !pattern.starts_with('/') {
                return Err(RouteTableError::InvalidPattern((*pattern).to_string()));
            }
            if !seen.insert(*pattern) {
                return Err(RouteTableError::DuplicatePattern((*pattern).to_string()));
            }
        }
        Ok(Self::compile(table, fallback))
    }

    /// The site's route table: home, teams table, and the not-found catch-all.
    pub fn site() -> Self {
        debug_assert!(Self::new(&SITE_ROUTES, ViewDescriptor::NotFound).is_ok());
        Self::compile(&SITE_ROUTES, ViewDescriptor::NotFound)
    }

    fn compile(table: &[(&str, ViewDescriptor)], fallback: ViewDescriptor) -> Self {
        let routes = table
            .iter()
            .map(|(pattern, view)| Route {
                matcher: Box::new(ExactMatcher::new(*pattern)),
                view: *view,
            })
            .collect();

        Self {
            routes,
            fallback: Route {
                matcher: Box::new(WildcardMatcher),
                view: fallback,
            },
        }
    }

    /// Select the view for `path`. Total: unknown paths get the fallback view.
    pub fn resolve(&self, path: &str) -> ViewDescriptor {
        self.match_route(path).view
    }

    /// The route that claims `path`.
    pub fn match_route(&self, path: &str) -> &Route {
        self.routes
            .iter()
            .find(|route| route.matcher.matches(path))
            .unwrap_or(&self.fallback)
    }

    /// All routes in evaluation order, fallback last.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.routes.iter().chain(std::iter::once(&self.fallback))
    }
}

impl Default for Router {
    fn default() -> Self {
        Self::site()
    }
}
