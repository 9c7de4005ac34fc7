//! Football API wire types, flattened rows, and error definitions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while talking to the football data API.
#[derive(Debug, Error)]
pub enum FootballError {
    /// Host or key not configured.
    #[error("missing API credential: {0}")]
    MissingCredentials(&'static str),

    /// Header value could not be encoded.
    #[error("invalid header value for {0}")]
    InvalidHeader(&'static str),

    /// Connection, timeout, or body read failure.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API returned status {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for football API operations.
pub type FootballResult<T> = Result<T, FootballError>;

/// Top-level `{"response": [...]}` wrapper used by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default = "Vec::new")]
    pub response: Vec<T>,
}

/// One `/leagues` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct LeagueEntry {
    pub league: LeagueInfo,
    #[serde(default)]
    pub seasons: Vec<SeasonInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LeagueInfo {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonInfo {
    #[serde(default)]
    pub year: Option<u16>,
    pub start: NaiveDate,
    pub end: NaiveDate,
    #[serde(default)]
    pub current: bool,
}

/// One `/teams` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TeamEntry {
    pub team: TeamInfo,
    #[serde(default)]
    pub venue: Option<VenueInfo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamInfo {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub founded: Option<u16>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VenueInfo {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
}

/// One league season, flattened from the nested `/leagues` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeagueSeason {
    pub id: u32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// One row of the teams table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamRow {
    pub id: u32,
    pub name: String,
    pub code: Option<String>,
    pub country: Option<String>,
    pub founded: Option<u16>,
    pub venue: Option<String>,
    pub city: Option<String>,
}

/// Expand each league into one row per season, preserving API order.
///
/// Leagues without any season produce no rows.
pub fn flatten_leagues(entries: Vec<LeagueEntry>) -> Vec<LeagueSeason> {
    entries
        .into_iter()
        .flat_map(|entry| {
            let league = entry.league;
            entry.seasons.into_iter().map(move |season| LeagueSeason {
                id: league.id,
                name: league.name.clone(),
                kind: league.kind.clone(),
                start: season.start,
                end: season.end,
            })
        })
        .collect()
}

/// Flatten team entries into table rows, sorted by team name.
pub fn flatten_teams(entries: Vec<TeamEntry>) -> Vec<TeamRow> {
    let mut rows: Vec<TeamRow> = entries
        .into_iter()
        .map(|entry| {
            let venue = entry.venue.unwrap_or(VenueInfo { name: None, city: None });
            TeamRow {
                id: entry.team.id,
                name: entry.team.name,
                code: entry.team.code,
                country: entry.team.country,
                founded: entry.team.founded,
                venue: venue.name,
                city: venue.city,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.name.cmp(&b.name));
    rows
}
