//! Response DTOs for the mediator server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::buffer::BufferStats;

/// Response body for the search endpoint (GET /search)
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    /// The requested query
    pub query: String,
    /// The limit the titles were returned for
    pub limit: usize,
    /// Matching page titles, best first
    pub titles: Vec<String>,
}

impl SearchResponse {
    /// Creates a new SearchResponse
    pub fn new(query: impl Into<String>, limit: usize, titles: Vec<String>) -> Self {
        Self {
            query: query.into(),
            limit,
            titles,
        }
    }
}

/// Response body for the page endpoint (GET /page/:title)
#[derive(Debug, Clone, Serialize)]
pub struct PageResponse {
    /// The requested title
    pub title: String,
    /// Full page text
    pub text: String,
}

impl PageResponse {
    /// Creates a new PageResponse
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Response body for the ranking endpoints (GET /zeitgeist, GET /trending)
#[derive(Debug, Clone, Serialize)]
pub struct RankingResponse {
    /// Ranked query strings, highest first
    pub queries: Vec<String>,
}

impl RankingResponse {
    /// Creates a new RankingResponse
    pub fn new(queries: Vec<String>) -> Self {
        Self { queries }
    }
}

/// Response body for the peak-load endpoint (GET /peak-load)
#[derive(Debug, Clone, Serialize)]
pub struct PeakLoadResponse {
    /// Window width in seconds
    pub window_seconds: u64,
    /// Maximum number of requests observed in any window
    pub max_requests: usize,
}

impl PeakLoadResponse {
    /// Creates a new PeakLoadResponse for the 30-second window
    pub fn new(max_requests: usize) -> Self {
        Self {
            window_seconds: 30,
            max_requests,
        }
    }
}

/// Per-buffer counters reported by the stats endpoint
#[derive(Debug, Clone, Serialize)]
pub struct BufferStatsBody {
    /// Number of successful reads
    pub hits: u64,
    /// Number of failed reads
    pub misses: u64,
    /// Entries evicted to make room at capacity
    pub evictions: u64,
    /// Entries dropped by the time-purge
    pub expirations: u64,
    /// Current number of resident entries
    pub resident_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<BufferStats> for BufferStatsBody {
    fn from(stats: BufferStats) -> Self {
        let hit_rate = stats.hit_rate();
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            expirations: stats.expirations,
            resident_entries: stats.resident_entries,
            hit_rate,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Page-text buffer counters
    pub pages: BufferStatsBody,
    /// Search-result buffer counters
    pub searches: BufferStatsBody,
}

impl StatsResponse {
    /// Creates a new StatsResponse from both buffers' counters
    pub fn new(pages: BufferStats, searches: BufferStats) -> Self {
        Self {
            pages: pages.into(),
            searches: searches.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
