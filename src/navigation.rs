//! Navigation state and history.
//!
//! Holds the current path and the back/forward history it was reached
//! through. Every change re-resolves the path against the router; the
//! router itself never owns or mutates this state.

use std::sync::Arc;

use crate::routing::Router;
use crate::views::{NotFoundView, ViewDescriptor};

/// Human-readable outcome of mounting a view.
pub fn mount_message(view: ViewDescriptor) -> &'static str {
    match view {
        ViewDescriptor::Home => "Home view mounted",
        ViewDescriptor::Table => "Table view mounted",
        ViewDescriptor::NotFound => NotFoundView::HEADING,
    }
}

/// Browser-style navigation over a fixed router.
#[derive(Debug)]
pub struct Navigator {
    router: Arc<Router>,
    history: Vec<String>,
    cursor: usize,
    current: ViewDescriptor,
}

impl Navigator {
    /// Start at `path`, resolving it immediately.
    pub fn new(router: Arc<Router>, path: impl Into<String>) -> Self {
        let path = path.into();
        let current = router.resolve(&path);
        Self {
            router,
            history: vec![path],
            cursor: 0,
            current,
        }
    }

    /// Current path and the view mounted for it.
    pub fn current(&self) -> (&str, ViewDescriptor) {
        (self.history[self.cursor].as_str(), self.current)
    }

    /// Push a new entry. Any forward history is discarded.
    pub fn navigate(&mut self, path: impl Into<String>) -> ViewDescriptor {
        self.history.truncate(self.cursor + 1);
        self.history.push(path.into());
        self.cursor += 1;
        self.remount()
    }

    /// Replace the current entry without growing history.
    pub fn redirect(&mut self, path: impl Into<String>) -> ViewDescriptor {
        self.history[self.cursor] = path.into();
        self.remount()
    }

    /// Step back one entry. `None` at the start of history.
    pub fn back(&mut self) -> Option<ViewDescriptor> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(self.remount())
    }

    /// Step forward one entry. `None` at the end of history.
    pub fn forward(&mut self) -> Option<ViewDescriptor> {
        if self.cursor + 1 >= self.history.len() {
            return None;
        }
        self.cursor += 1;
        Some(self.remount())
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    fn remount(&mut self) -> ViewDescriptor {
        let path = &self.history[self.cursor];
        let view = self.router.resolve(path);
        if view != self.current {
            tracing::debug!(path = %path, from = %self.current, to = %view, "View changed");
        }
        self.current = view;
        view
    }
}
