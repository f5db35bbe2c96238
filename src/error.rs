//! Error types for the wiki mediator
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Buffer Error Enum ==
/// Error signaled by the buffer on a failed read.
///
/// A miss is a routine, recoverable outcome: callers are expected to
/// recompute the payload and re-insert it. The buffer never returns a
/// placeholder value in place of this error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// No resident entry for the requested id (never inserted, evicted
    /// for capacity, or timed out)
    #[error("No entry in buffer for id: {0}")]
    NotFound(String),
}

// == Source Error Enum ==
/// Error raised by a remote content source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The requested page does not exist on the remote source
    #[error("Page not found: {0}")]
    PageMissing(String),

    /// The remote request failed (network, decode, or protocol error)
    #[error("Wiki request failed: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        SourceError::Transport(err.to_string())
    }
}

// == Server Error Enum ==
/// Unified error type for the mediator server.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Requested resource does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The remote wiki source failed
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<SourceError> for ServerError {
    fn from(err: SourceError) -> Self {
        match err {
            SourceError::PageMissing(title) => ServerError::NotFound(title),
            SourceError::Transport(msg) => ServerError::Upstream(msg),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Upstream(_) => StatusCode::BAD_GATEWAY,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the mediator server.
pub type Result<T> = std::result::Result<T, ServerError>;
