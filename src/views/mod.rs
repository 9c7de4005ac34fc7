//! Page views mounted by the router.
//!
//! # Data Flow
//! ```text
//! navigation path
//!     → routing::Router::resolve
//!     → ViewDescriptor (Home | Table | NotFound)
//!     → ViewRegistry::render
//!     → Markup (HTML fragment)
//! ```
//!
//! # Design Decisions
//! - Views are opaque to the router; it only ever sees a descriptor
//! - Every view exposes a zero-argument `render`
//! - Views never fail: missing data renders as an explicit empty state
//! - Markup comes from askama templates under `templates/`, auto-escaped

pub mod home;
pub mod not_found;
pub mod table;

use std::fmt;

use askama::Template;

pub use home::HomeView;
pub use not_found::NotFoundView;
pub use table::TableView;

/// Identifies which screen to mount for a navigation path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewDescriptor {
    Home,
    Table,
    NotFound,
}

impl ViewDescriptor {
    /// Stable label used in logs and metrics.
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewDescriptor::Home => "home",
            ViewDescriptor::Table => "table",
            ViewDescriptor::NotFound => "not_found",
        }
    }

    /// Returns true for the catch-all view.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ViewDescriptor::NotFound)
    }
}

impl fmt::Display for ViewDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rendered HTML fragment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A renderable screen.
pub trait View: Send + Sync {
    /// Render the view. Takes no route parameters.
    fn render(&self) -> Markup;

    /// Document title for the page shell.
    fn title(&self) -> &'static str;
}

/// Maps each descriptor to the view that provides it.
pub struct ViewRegistry {
    home: HomeView,
    table: TableView,
    not_found: NotFoundView,
}

impl ViewRegistry {
    pub fn new(home: HomeView, table: TableView, not_found: NotFoundView) -> Self {
        Self {
            home,
            table,
            not_found,
        }
    }

    /// Look up the provider for a descriptor.
    pub fn provider(&self, descriptor: ViewDescriptor) -> &dyn View {
        match descriptor {
            ViewDescriptor::Home => &self.home,
            ViewDescriptor::Table => &self.table,
            ViewDescriptor::NotFound => &self.not_found,
        }
    }

    /// Render the view selected by `descriptor`.
    pub fn render(&self, descriptor: ViewDescriptor) -> Markup {
        self.provider(descriptor).render()
    }
}

/// Render a view template. A failed render is logged and yields empty markup.
pub(crate) fn render_template<T: Template>(template: &T) -> Markup {
    match template.render() {
        Ok(html) => Markup::new(html),
        Err(e) => {
            tracing::error!(error = %e, "View template failed to render");
            Markup::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::football::TableStore;

    fn registry() -> ViewRegistry {
        ViewRegistry::new(
            HomeView::new(),
            TableView::new(TableStore::new()),
            NotFoundView::new(),
        )
    }

    #[test]
    fn test_registry_dispatch() {
        let views = registry();
        assert!(views.render(ViewDescriptor::Home).as_str().contains("Matchday"));
        assert!(views
            .render(ViewDescriptor::Table)
            .as_str()
            .contains("Premier League Teams"));
        assert_eq!(
            views.render(ViewDescriptor::NotFound).as_str().trim(),
            "<h1>404 Not Found</h1>"
        );
    }

    #[test]
    fn test_descriptor_labels() {
        assert_eq!(ViewDescriptor::Home.to_string(), "home");
        assert_eq!(ViewDescriptor::NotFound.as_str(), "not_found");
        assert!(ViewDescriptor::NotFound.is_not_found());
        assert!(!ViewDescriptor::Table.is_not_found());
    }
}
