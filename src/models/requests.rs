//! Request DTOs for the mediator server API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

fn default_limit() -> usize {
    10
}

/// Query parameters for the search endpoint (GET /search)
#[derive(Debug, Clone, Deserialize)]
pub struct SearchParams {
    /// The search query
    pub q: String,
    /// Maximum number of titles to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl SearchParams {
    /// Validates the parameters.
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.q.trim().is_empty() {
            return Some("Query cannot be empty".to_string());
        }
        if self.limit == 0 {
            return Some("Limit must be positive".to_string());
        }
        None
    }
}

/// Query parameters for the ranking endpoints (GET /zeitgeist, GET /trending)
#[derive(Debug, Clone, Deserialize)]
pub struct LimitParams {
    /// Maximum number of entries to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

impl LimitParams {
    /// Validates the parameters.
    pub fn validate(&self) -> Option<String> {
        if self.limit == 0 {
            return Some("Limit must be positive".to_string());
        }
        None
    }
}
