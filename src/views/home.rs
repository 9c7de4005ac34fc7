//! Landing page.

use askama::Template;

use crate::views::{render_template, Markup, View};

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate<'a> {
    table_href: &'a str,
}

/// The site homepage, mounted at `/` and `/home`.
#[derive(Debug, Clone, Default)]
pub struct HomeView;

impl HomeView {
    pub fn new() -> Self {
        Self
    }
}

impl View for HomeView {
    fn render(&self) -> Markup {
        render_template(&HomeTemplate {
            table_href: "/premier-league/teams",
        })
    }

    fn title(&self) -> &'static str {
        "Matchday"
    }
}
