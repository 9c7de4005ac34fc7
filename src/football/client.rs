//! Football data API client.
//!
//! # Responsibilities
//! - Build authenticated requests (`x-rapidapi-host` / `x-rapidapi-key`)
//! - Fetch leagues and teams, flattening nested responses into rows
//! - Map transport and status failures to `FootballError`

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

use crate::config::FootballConfig;
use crate::football::types::{
    flatten_leagues, flatten_teams, ApiEnvelope, FootballError, FootballResult, LeagueEntry,
    LeagueSeason, TeamEntry, TeamRow,
};

pub const HEADER_HOST: &str = "x-rapidapi-host";
pub const HEADER_KEY: &str = "x-rapidapi-key";

/// Client for the football data API.
#[derive(Clone)]
pub struct FootballClient {
    http: reqwest::Client,
    base_url: String,
}

impl FootballClient {
    /// Create a client from configuration. Credentials must be present.
    pub fn new(config: &FootballConfig) -> FootballResult<Self> {
        let host = config
            .api_host
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(FootballError::MissingCredentials("api_host"))?;
        let key = config
            .api_key
            .as_deref()
            .filter(|v| !v.is_empty())
            .ok_or(FootballError::MissingCredentials("api_key"))?;

        let mut headers = HeaderMap::new();
        headers.insert(
            HEADER_HOST,
            HeaderValue::from_str(host).map_err(|_| FootballError::InvalidHeader(HEADER_HOST))?,
        );
        let mut key = HeaderValue::from_str(key).map_err(|_| FootballError::InvalidHeader(HEADER_KEY))?;
        key.set_sensitive(true);
        headers.insert(HEADER_KEY, key);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Full URL for an endpoint such as `/leagues`.
    pub fn make_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint)
    }

    async fn get(&self, endpoint: &str) -> FootballResult<reqwest::Response> {
        let url = self.make_url(endpoint);
        tracing::debug!(url = %url, "Football API request");
        Ok(self.http.get(url).send().await?)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> FootballResult<Vec<T>> {
        let body = response.bytes().await?;
        let envelope: ApiEnvelope<T> = serde_json::from_slice(&body)?;
        Ok(envelope.response)
    }

    /// All leagues, one row per season.
    ///
    /// A non-200 answer yields an empty list rather than an error.
    pub async fn leagues(&self) -> FootballResult<Vec<LeagueSeason>> {
        let response = self.get("/leagues").await?;
        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(status = %response.status(), "Leagues request unsuccessful");
            return Ok(Vec::new());
        }
        let entries: Vec<LeagueEntry> = Self::decode(response).await?;
        Ok(flatten_leagues(entries))
    }

    /// Teams of one league season, sorted by name.
    pub async fn teams(&self, league_id: u32, season: u16) -> FootballResult<Vec<TeamRow>> {
        let response = self
            .get(&format!("/teams?league={league_id}&season={season}"))
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FootballError::Status(status.as_u16()));
        }
        let entries: Vec<TeamEntry> = Self::decode(response).await?;
        Ok(flatten_teams(entries))
    }
}

impl std::fmt::Debug for FootballClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FootballClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
