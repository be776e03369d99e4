//! HTTP API over the query pipeline.
//!
//! | Route | Method | Body | Response |
//! |-------|--------|------|----------|
//! | `/health` | GET | — | `ok` |
//! | `/els` | POST | [`ElsQuery`] JSON | [`ElsReport`] JSON, or `400 {"error": ...}` |
//!
//! The corpus is loaded once at startup and shared read-only across
//! requests. Searches run on the blocking pool since a wide skip range over a
//! large corpus is pure CPU work.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use nimbus_core::{config::Config, run_query, ElsError, ElsQuery, ElsReport, TextBuffer};
use std::sync::Arc;

/// Shared, immutable server state.
#[derive(Debug)]
pub struct AppState {
    pub corpus: TextBuffer,
    pub config: Config,
}

impl AppState {
    pub fn new(corpus: TextBuffer, config: Config) -> Arc<Self> {
        Arc::new(Self { corpus, config })
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/els", post(els))
        .with_state(state)
}

/// Bind `addr` and serve until the process is stopped.
pub async fn serve(state: Arc<AppState>, addr: &str) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, letters = state.corpus.len(), "listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn els(
    State(state): State<Arc<AppState>>,
    Json(query): Json<ElsQuery>,
) -> Result<Json<ElsReport>, ApiError> {
    tracing::debug!(term = %query.term, skip = ?query.skip, "els query");
    let report = tokio::task::spawn_blocking(move || {
        run_query(&state.corpus, &query, &state.config)
    })
    .await
    .map_err(|e| ApiError::Internal(e.to_string()))??;

    tracing::info!(
        term = %report.term,
        found = report.found,
        start_index = ?report.hit.as_ref().map(|h| h.start_index),
        "els query answered"
    );
    Ok(Json(report))
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, thiserror::Error)]
enum ApiError {
    #[error(transparent)]
    Invalid(#[from] ElsError),

    #[error("search task failed: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            tracing::error!(error = %self, "els query failed");
        } else {
            tracing::debug!(error = %self, "els query rejected");
        }
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
