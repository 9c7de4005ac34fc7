//! Premier League teams table.
//!
//! The view owns a handle to the table store and renders whatever snapshot
//! is current at render time. Fetching and refreshing is the feed's job
//! (`football::refresher`); the view never blocks on the network.

use askama::Template;

use crate::football::{TableSnapshot, TableStore, TeamRow};
use crate::views::{render_template, Markup, View};

#[derive(Template)]
#[template(path = "table.html")]
struct TableTemplate<'a> {
    snapshot: Option<SnapshotData<'a>>,
}

struct SnapshotData<'a> {
    season: u16,
    updated: String,
    rows: Vec<RowData<'a>>,
}

struct RowData<'a> {
    name: &'a str,
    code: &'a str,
    founded: String,
    venue: &'a str,
    city: &'a str,
}

impl<'a> SnapshotData<'a> {
    fn new(snapshot: &'a TableSnapshot) -> Self {
        Self {
            season: snapshot.season,
            updated: snapshot.fetched_at.format("%Y-%m-%d %H:%M UTC").to_string(),
            rows: snapshot.teams.iter().map(RowData::new).collect(),
        }
    }
}

impl<'a> RowData<'a> {
    fn new(team: &'a TeamRow) -> Self {
        Self {
            name: &team.name,
            code: team.code.as_deref().unwrap_or(""),
            founded: team.founded.map(|y| y.to_string()).unwrap_or_default(),
            venue: team.venue.as_deref().unwrap_or(""),
            city: team.city.as_deref().unwrap_or(""),
        }
    }
}

/// Renders the latest teams snapshot as an HTML table.
#[derive(Debug, Clone)]
pub struct TableView {
    store: TableStore,
}

impl TableView {
    pub fn new(store: TableStore) -> Self {
        Self { store }
    }
}

impl View for TableView {
    fn render(&self) -> Markup {
        let current = self.store.load();
        let snapshot = current
            .as_deref()
            .filter(|snapshot| !snapshot.teams.is_empty())
            .map(SnapshotData::new);
        render_template(&TableTemplate { snapshot })
    }

    fn title(&self) -> &'static str {
        "Premier League Teams"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn team(name: &str, code: Option<&str>) -> TeamRow {
        TeamRow {
            id: 1,
            name: name.to_string(),
            code: code.map(str::to_string),
            country: Some("England".to_string()),
            founded: Some(1878),
            venue: Some("Old Trafford".to_string()),
            city: Some("Manchester".to_string()),
        }
    }

    #[test]
    fn test_empty_store_renders_placeholder() {
        let view = TableView::new(TableStore::new());
        let html = view.render();
        assert!(html.as_str().contains("No team data available yet."));
        assert!(!html.as_str().contains("<table>"));
    }

    #[test]
    fn test_empty_snapshot_renders_placeholder() {
        let store = TableStore::new();
        store.publish(TableSnapshot {
            league_id: 39,
            season: 2023,
            teams: Vec::new(),
            fetched_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        });

        let html = TableView::new(store).render().into_string();
        assert!(html.contains("No team data available yet."));
    }

    #[test]
    fn test_snapshot_rows_rendered_and_escaped() {
        let store = TableStore::new();
        store.publish(TableSnapshot {
            league_id: 39,
            season: 2023,
            teams: vec![
                team("Brighton & Hove Albion", Some("BRI")),
                team("Manchester United", None),
                team("<script>", Some("X&Y")),
            ],
            fetched_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        });

        let html = TableView::new(store).render().into_string();
        assert!(html.contains("Season 2023"));
        assert!(html.contains("updated 2024-01-02 03:04 UTC"));
        assert!(html.contains("<td>Brighton &amp; Hove Albion</td><td>BRI</td><td>1878</td>"));
        assert!(html.contains("<td>Manchester United</td><td></td>"));
        assert!(html.contains("<td>&lt;script&gt;</td><td>X&amp;Y</td>"));
        assert!(!html.contains("No team data available yet."));
    }
}
