//! Response construction.
//!
//! # Responsibilities
//! - Wrap rendered view markup in the HTML page shell
//! - Map data API failures to status codes with a JSON error body
//!
//! # Design Decisions
//! - Page status follows the view: 404 for the catch-all, 200 otherwise
//! - Upstream API failures surface as 502, missing configuration as 503

use askama::Template;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::football::FootballError;
use crate::views::Markup;

#[derive(Template)]
#[template(path = "page.html")]
struct PageTemplate<'a> {
    title: &'a str,
    body: &'a str,
}

/// Render a full HTML document around a view's markup.
pub fn page(status: StatusCode, title: &str, body: &Markup) -> Response {
    let shell = PageTemplate {
        title,
        body: body.as_str(),
    };
    match shell.render() {
        Ok(document) => (status, Html(document)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Page shell failed to render");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Errors returned by the `/api` data routes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("football data feed is disabled")]
    FeedDisabled,

    #[error("table data not yet available")]
    NotReady,

    #[error(transparent)]
    Upstream(#[from] FootballError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FeedDisabled | ApiError::NotReady => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(FootballError::MissingCredentials(_))
            | ApiError::Upstream(FootballError::InvalidHeader(_)) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status == StatusCode::BAD_GATEWAY {
            tracing::warn!(error = %self, "Upstream data request failed");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_page_shell() {
        let response = page(
            StatusCode::NOT_FOUND,
            "404 Not Found",
            &Markup::new("<h1>404 Not Found</h1>"),
        );
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()["content-type"],
            "text/html; charset=utf-8"
        );

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains("<title>404 Not Found</title>"));
        assert!(body.contains("<main><h1>404 Not Found</h1></main>"));
    }

    #[tokio::test]
    async fn test_page_title_escaped() {
        let response = page(StatusCode::OK, "Spurs & <Co>", &Markup::new("<p>ok</p>"));
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = String::from_utf8(body.to_vec()).unwrap();
        assert!(body.contains("<title>Spurs &amp; &lt;Co&gt;</title>"));
        assert!(body.contains("<main><p>ok</p></main>"));
    }

    #[test]
    fn test_api_error_status() {
        assert_eq!(ApiError::NotReady.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(
            ApiError::Upstream(FootballError::Status(500)).status(),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            ApiError::Upstream(FootballError::MissingCredentials("api_key")).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
