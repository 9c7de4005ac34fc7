//! Catch-all view.

use askama::Template;

use crate::views::{render_template, Markup, View};

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate<'a> {
    heading: &'a str,
}

/// Static content shown for any path no other route claims.
#[derive(Debug, Clone, Default)]
pub struct NotFoundView;

impl NotFoundView {
    pub const HEADING: &'static str = "404 Not Found";

    pub fn new() -> Self {
        Self
    }
}

impl View for NotFoundView {
    fn render(&self) -> Markup {
        render_template(&NotFoundTemplate {
            heading: Self::HEADING,
        })
    }

    fn title(&self) -> &'static str {
        Self::HEADING
    }
}
