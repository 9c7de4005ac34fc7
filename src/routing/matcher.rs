//! Path matching logic.
//!
//! # Responsibilities
//! - Match a navigation path against an exact literal
//! - Provide the catch-all matcher used by the fallback route
//!
//! # Design Decisions
//! - Matching is case-sensitive and byte-exact
//! - No trailing-slash or query-string normalization at this layer
//! - No regex; every check is a single string comparison

/// Trait for matching navigation paths against a pattern.
pub trait Matcher: Send + Sync + std::fmt::Debug {
    /// Returns true if the path matches this pattern.
    fn matches(&self, path: &str) -> bool;

    /// The pattern as written in the route table.
    fn pattern(&self) -> &str;
}

/// Matches one literal path exactly.
#[derive(Debug, Clone)]
pub struct ExactMatcher {
    path: String,
}

impl ExactMatcher {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Matcher for ExactMatcher {
    fn matches(&self, path: &str) -> bool {
        path == self.path
    }

    fn pattern(&self) -> &str {
        &self.path
    }
}

/// Matches every path. Only valid as the last route of a table.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardMatcher;

impl WildcardMatcher {
    pub const PATTERN: &'static str = "*";
}

impl Matcher for WildcardMatcher {
    fn matches(&self, _path: &str) -> bool {
        true
    }

    fn pattern(&self) -> &str {
        Self::PATTERN
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = ExactMatcher::new("/home");

        assert!(matcher.matches("/home"));
        assert!(!matcher.matches("/home/"));
        assert!(!matcher.matches("/HOME")); // Case sensitive
        assert!(!matcher.matches("/home?tab=1"));
        assert!(!matcher.matches(""));
    }

    #[test]
    fn test_wildcard_matcher() {
        let matcher = WildcardMatcher;

        assert!(matcher.matches(""));
        assert!(matcher.matches("/anything/at/all"));
        assert_eq!(matcher.pattern(), "*");
    }
}
