//! HTTP surface: a three-route axum app serving extracted stories.
//!
//! Every request runs its own fetch-then-extract pipeline; there is no
//! caching and no cross-request state beyond the shared HTTP client.
//! Identical concurrent requests each hit the homepage independently,
//! which trades efficiency for a core that stays pure and reentrant.
//!
//! # Routes
//!
//! | Route | Response |
//! |-------|----------|
//! | `GET /getTimeStories` | pretty JSON story array, `Cache-Control: no-store` |
//! | `GET /` and `GET /health` | same array, doubles as a liveness probe |
//! | anything else | 404 plain `Not Found` |
//!
//! Fetch failures surface as 500 with a JSON `{error, details}` body.

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use reqwest::Client;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::extract;
use crate::fetch::{self, FetchError};
use crate::models::{ErrorBody, StoryRecord};

/// Shared per-process state. The HTTP client is the only thing worth
/// reusing; everything else is plain configuration.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Client used for homepage fetches.
    pub client: Client,
    /// Full URL of the page to scrape.
    pub source_url: String,
    /// Origin prefixed onto site-relative story links.
    pub origin: String,
    /// Stories returned per request.
    pub story_count: usize,
    /// Redirect hop budget for each fetch.
    pub max_redirects: usize,
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/getTimeStories", get(get_time_stories))
        .route("/", get(liveness))
        .route("/health", get(liveness))
        .fallback(not_found)
        .with_state(state)
}

/// One full request pipeline: fetch the homepage, extract stories.
async fn fetch_and_extract(state: &AppState) -> Result<Vec<StoryRecord>, FetchError> {
    let html = fetch::fetch_html(&state.client, &state.source_url, state.max_redirects).await?;
    Ok(extract::latest_stories(&html, &state.origin, state.story_count))
}

/// Pretty-printed story array, matching the wire format clients expect.
fn stories_body(stories: &[StoryRecord]) -> String {
    serde_json::to_string_pretty(stories).unwrap_or_else(|_| "[]".to_string())
}

#[instrument(level = "info", skip_all)]
async fn get_time_stories(State(state): State<Arc<AppState>>) -> Response {
    match fetch_and_extract(&state).await {
        Ok(stories) => {
            info!(count = stories.len(), "Serving latest stories");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/json; charset=utf-8"),
                    (header::CACHE_CONTROL, "no-store"),
                ],
                stories_body(&stories),
            )
                .into_response()
        }
        Err(e) => failure(&e),
    }
}

/// Liveness probe that also happens to return data.
#[instrument(level = "info", skip_all)]
async fn liveness(State(state): State<Arc<AppState>>) -> Response {
    match fetch_and_extract(&state).await {
        Ok(stories) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json; charset=utf-8")],
            stories_body(&stories),
        )
            .into_response(),
        Err(e) => failure(&e),
    }
}

async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "Not Found").into_response()
}

fn failure(err: &FetchError) -> Response {
    error!(error = %err, "Fetch/extract pipeline failed");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorBody {
            error: "Failed to fetch/parse".to_string(),
            details: err.to_string(),
        }),
    )
        .into_response()
}
