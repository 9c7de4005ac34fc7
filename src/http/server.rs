//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with page, data API and health handlers
//! - Wire up middleware (tracing, timeout, request ID, security headers)
//! - Resolve every page request through the route table and mount the view
//! - Serve until the shutdown broadcast fires

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Method, Request, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::football::{FootballClient, TableStore};
use crate::http::request::{request_id, UuidRequestId};
use crate::http::response::{self, ApiError};
use crate::observability::metrics;
use crate::routing::Router;
use crate::security::headers as security_headers;
use crate::views::{HomeView, NotFoundView, TableView, ViewRegistry};

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<Router>,
    pub views: Arc<ViewRegistry>,
    pub store: TableStore,
    pub client: Option<FootballClient>,
}

impl AppState {
    /// The site's route table and views over `store`.
    pub fn new(store: TableStore, client: Option<FootballClient>) -> Self {
        let views = ViewRegistry::new(
            HomeView::new(),
            TableView::new(store.clone()),
            NotFoundView::new(),
        );
        Self {
            router: Arc::new(Router::site()),
            views: Arc::new(views),
            store,
            client,
        }
    }
}

/// HTTP server for the site.
pub struct HttpServer {
    app: axum::Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig, store: TableStore, client: Option<FootballClient>) -> Self {
        let state = AppState::new(store, client);
        Self {
            app: Self::build_router(&config, state),
        }
    }

    /// Build the Axum router with all middleware layers.
    #[allow(deprecated)]
    fn build_router(config: &SiteConfig, state: AppState) -> axum::Router {
        let app = axum::Router::new()
            .route("/health", get(health_handler))
            .route("/api/leagues", get(leagues_handler))
            .route("/api/teams", get(teams_handler))
            .fallback(page_handler)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(config.timeouts.request_secs)))
            .layer(TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                tracing::info_span!(
                    "http",
                    method = %req.method(),
                    path = %req.uri().path(),
                    request_id = %request_id(req.headers()),
                )
            }))
            .layer(PropagateRequestIdLayer::x_request_id())
            .layer(SetRequestIdLayer::x_request_id(UuidRequestId));

        if config.security.enable_headers {
            security_headers::apply(app)
        } else {
            app
        }
    }

    /// A handle to the service, for in-process requests.
    pub fn app(&self) -> axum::Router {
        self.app.clone()
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Page handler: resolve the path, mount the view.
async fn page_handler(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    let start = Instant::now();
    if method != Method::GET && method != Method::HEAD {
        return (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET, HEAD")]).into_response();
    }

    let path = uri.path();
    let view = state.router.resolve(path);
    let provider = state.views.provider(view);
    let markup = provider.render();
    let status = if view.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    tracing::debug!(
        request_id = %request_id(&headers),
        path = %path,
        view = %view,
        "View mounted"
    );
    metrics::record_page_view(view);
    metrics::record_request(view.as_str(), status.as_u16(), start);

    response::page(status, provider.title(), &markup)
}

async fn health_handler() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Flattened league seasons, fetched live.
async fn leagues_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    let client = state.client.as_ref().ok_or(ApiError::FeedDisabled)?;
    let leagues = client.leagues().await?;
    Ok(Json(leagues).into_response())
}

/// The current teams snapshot.
async fn teams_handler(State(state): State<AppState>) -> Result<Response, ApiError> {
    if state.client.is_none() && state.store.load().is_none() {
        return Err(ApiError::FeedDisabled);
    }
    let snapshot = state.store.load().ok_or(ApiError::NotReady)?;
    Ok(Json(&*snapshot).into_response())
}
