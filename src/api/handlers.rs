//! API Handlers
//!
//! HTTP request handlers for each mediator server endpoint.

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::mediator::{ContentSource, WikiMediator, WikiSource};
use crate::models::{
    HealthResponse, LimitParams, PageResponse, PeakLoadResponse, RankingResponse, SearchParams,
    SearchResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The mediator's buffers and log are internally shared, so cloning the
/// state per request is cheap.
#[derive(Clone)]
pub struct AppState<S> {
    /// The caching mediator fronting the wiki source
    pub mediator: WikiMediator<S>,
}

impl<S: ContentSource> AppState<S> {
    /// Creates a new AppState around the given mediator.
    pub fn new(mediator: WikiMediator<S>) -> Self {
        Self { mediator }
    }
}

impl AppState<WikiSource> {
    /// Creates a new AppState from configuration, talking to the
    /// configured MediaWiki endpoint.
    pub fn from_config(config: &Config) -> Self {
        let source = WikiSource::new(config.wiki_api_url.clone());
        let mediator = WikiMediator::new(source, config.cache_capacity, config.cache_timeout);
        Self::new(mediator)
    }
}

/// Handler for GET /search
///
/// Returns page titles matching the query, served from the search buffer
/// when a wide-enough cached result exists.
pub async fn search_handler<S: ContentSource + Clone + 'static>(
    State(state): State<AppState<S>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>> {
    if let Some(error_msg) = params.validate() {
        return Err(ServerError::InvalidRequest(error_msg));
    }

    let titles = state.mediator.search(&params.q, params.limit).await?;

    Ok(Json(SearchResponse::new(params.q, params.limit, titles)))
}

/// Handler for GET /page/:title
///
/// Returns the text of a page, served from the page buffer when resident.
pub async fn page_handler<S: ContentSource + Clone + 'static>(
    State(state): State<AppState<S>>,
    Path(title): Path<String>,
) -> Result<Json<PageResponse>> {
    if title.trim().is_empty() {
        return Err(ServerError::InvalidRequest(
            "Title cannot be empty".to_string(),
        ));
    }

    let text = state.mediator.page_text(&title).await?;

    Ok(Json(PageResponse::new(title, text)))
}

/// Handler for GET /zeitgeist
///
/// Returns the most requested strings of all time, most frequent first.
pub async fn zeitgeist_handler<S: ContentSource + Clone + 'static>(
    State(state): State<AppState<S>>,
    Query(params): Query<LimitParams>,
) -> Result<Json<RankingResponse>> {
    if let Some(error_msg) = params.validate() {
        return Err(ServerError::InvalidRequest(error_msg));
    }

    Ok(Json(RankingResponse::new(
        state.mediator.zeitgeist(params.limit),
    )))
}

/// Handler for GET /trending
///
/// Returns distinct strings requested in the last 30 seconds, most recent
/// first.
pub async fn trending_handler<S: ContentSource + Clone + 'static>(
    State(state): State<AppState<S>>,
    Query(params): Query<LimitParams>,
) -> Result<Json<RankingResponse>> {
    if let Some(error_msg) = params.validate() {
        return Err(ServerError::InvalidRequest(error_msg));
    }

    Ok(Json(RankingResponse::new(
        state.mediator.trending(params.limit),
    )))
}

/// Handler for GET /peak-load
///
/// Returns the maximum number of requests seen in any 30-second window.
pub async fn peak_load_handler<S: ContentSource + Clone + 'static>(
    State(state): State<AppState<S>>,
) -> Json<PeakLoadResponse> {
    Json(PeakLoadResponse::new(state.mediator.peak_load_30s()))
}

/// Handler for GET /stats
///
/// Returns both buffers' activity counters.
pub async fn stats_handler<S: ContentSource + Clone + 'static>(
    State(state): State<AppState<S>>,
) -> Json<StatsResponse> {
    Json(StatsResponse::new(
        state.mediator.pages().stats(),
        state.mediator.searches().stats(),
    ))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
