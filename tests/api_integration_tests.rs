//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint against a stub
//! content source, including cache behavior across requests.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use wiki_mediator::error::SourceError;
use wiki_mediator::mediator::{ContentSource, WikiMediator};
use wiki_mediator::AppState;

// == Helper Functions ==

/// Deterministic in-memory source that counts remote calls.
#[derive(Debug, Clone, Default)]
struct StubSource {
    search_calls: Arc<AtomicUsize>,
    page_calls: Arc<AtomicUsize>,
}

impl ContentSource for StubSource {
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<String>, SourceError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        Ok((0..limit).map(|i| format!("{}-{}", query, i)).collect())
    }

    async fn page_text(&self, title: &str) -> Result<String, SourceError> {
        self.page_calls.fetch_add(1, Ordering::SeqCst);
        if title == "Missing" {
            return Err(SourceError::PageMissing(title.to_string()));
        }
        Ok(format!("text of {}", title))
    }
}

fn create_test_app() -> (Router, StubSource) {
    let source = StubSource::default();
    let mediator = WikiMediator::new(source.clone(), 100, 1000);
    (wiki_mediator::api::create_router(AppState::new(mediator)), source)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

// == Search Endpoint Tests ==

#[tokio::test]
async fn test_search_endpoint_returns_titles() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/search?q=rust&limit=3").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["query"].as_str().unwrap(), "rust");
    assert_eq!(json["titles"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_search_served_from_cache_on_repeat() {
    let (app, source) = create_test_app();

    let (status, first) = get(&app, "/search?q=rust&limit=5").await;
    assert_eq!(status, StatusCode::OK);

    // Narrower repeat is a prefix of the cached list, no remote call
    let (status, second) = get(&app, "/search?q=rust&limit=2").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        second["titles"].as_array().unwrap()[..],
        first["titles"].as_array().unwrap()[..2]
    );
    assert_eq!(source.search_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_search_wider_request_refetches() {
    let (app, source) = create_test_app();

    get(&app, "/search?q=rust&limit=2").await;
    let (status, json) = get(&app, "/search?q=rust&limit=5").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["titles"].as_array().unwrap().len(), 5);
    assert_eq!(source.search_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_search_empty_query_rejected() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/search?q=").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json.get("error").is_some());
}

#[tokio::test]
async fn test_search_zero_limit_rejected() {
    let (app, _) = create_test_app();

    let (status, _) = get(&app, "/search?q=rust&limit=0").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// == Page Endpoint Tests ==

#[tokio::test]
async fn test_page_endpoint_returns_text() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/page/Rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"].as_str().unwrap(), "Rust");
    assert_eq!(json["text"].as_str().unwrap(), "text of Rust");
}

#[tokio::test]
async fn test_page_served_from_cache_on_repeat() {
    let (app, source) = create_test_app();

    get(&app, "/page/Rust").await;
    let (status, json) = get(&app, "/page/Rust").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["text"].as_str().unwrap(), "text of Rust");
    assert_eq!(source.page_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_page_endpoint_missing_page() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/page/Missing").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json.get("error").is_some());
}

// == Analytics Endpoint Tests ==

#[tokio::test]
async fn test_zeitgeist_endpoint_ranks_queries() {
    let (app, _) = create_test_app();

    get(&app, "/page/Rust").await;
    get(&app, "/page/Rust").await;
    get(&app, "/search?q=ownership&limit=3").await;

    let (status, json) = get(&app, "/zeitgeist?limit=10").await;

    assert_eq!(status, StatusCode::OK);
    let queries: Vec<&str> = json["queries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(queries, vec!["Rust", "ownership"]);
}

#[tokio::test]
async fn test_trending_endpoint_most_recent_first() {
    let (app, _) = create_test_app();

    get(&app, "/page/First").await;
    get(&app, "/page/Second").await;

    let (status, json) = get(&app, "/trending?limit=10").await;

    assert_eq!(status, StatusCode::OK);
    let queries: Vec<&str> = json["queries"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(queries, vec!["Second", "First"]);
}

#[tokio::test]
async fn test_peak_load_endpoint_counts_requests() {
    let (app, _) = create_test_app();

    get(&app, "/page/Rust").await;
    get(&app, "/search?q=rust&limit=3").await;

    let (status, json) = get(&app, "/peak-load").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["window_seconds"].as_u64().unwrap(), 30);
    // Two queries plus the peak-load call itself
    assert_eq!(json["max_requests"].as_u64().unwrap(), 3);
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_tracks_buffer_traffic() {
    let (app, _) = create_test_app();

    get(&app, "/page/Rust").await; // miss
    get(&app, "/page/Rust").await; // hit
    get(&app, "/search?q=rust&limit=3").await; // miss

    let (status, json) = get(&app, "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pages"]["hits"].as_u64().unwrap(), 1);
    assert_eq!(json["pages"]["misses"].as_u64().unwrap(), 1);
    assert_eq!(json["pages"]["resident_entries"].as_u64().unwrap(), 1);
    assert_eq!(json["searches"]["misses"].as_u64().unwrap(), 1);
    assert!(json["pages"].get("hit_rate").is_some());
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let (app, _) = create_test_app();

    let (status, json) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"].as_str().unwrap(), "healthy");
    assert!(json.get("timestamp").is_some());
}
