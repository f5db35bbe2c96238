//! API Routes
//!
//! Configures the Axum router with all mediator server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, page_handler, peak_load_handler, search_handler, stats_handler,
    trending_handler, zeitgeist_handler, AppState,
};
use crate::mediator::ContentSource;

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /search?q=&limit=` - Search for page titles
/// - `GET /page/:title` - Retrieve a page's text
/// - `GET /zeitgeist?limit=` - All-time most requested strings
/// - `GET /trending?limit=` - Recent distinct requests (30s window)
/// - `GET /peak-load` - Peak request count in any 30s window
/// - `GET /stats` - Buffer statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router<S: ContentSource + Clone + 'static>(state: AppState<S>) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router with all endpoints
    Router::new()
        .route("/search", get(search_handler::<S>))
        .route("/page/:title", get(page_handler::<S>))
        .route("/zeitgeist", get(zeitgeist_handler::<S>))
        .route("/trending", get(trending_handler::<S>))
        .route("/peak-load", get(peak_load_handler::<S>))
        .route("/stats", get(stats_handler::<S>))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SourceError;
    use crate::mediator::WikiMediator;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    #[derive(Debug, Clone, Default)]
    struct StubSource;

    impl ContentSource for StubSource {
        async fn search(
            &self,
            query: &str,
            limit: usize,
        ) -> std::result::Result<Vec<String>, SourceError> {
            Ok((0..limit).map(|i| format!("{}-{}", query, i)).collect())
        }

        async fn page_text(&self, title: &str) -> std::result::Result<String, SourceError> {
            Ok(format!("text of {}", title))
        }
    }

    fn create_test_app() -> Router {
        let mediator = WikiMediator::new(StubSource, 100, 1000);
        create_router(AppState::new(mediator))
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_search_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?q=rust&limit=3")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_search_requires_query() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/search?q=")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_stats_endpoint() {
        let app = create_test_app();

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
