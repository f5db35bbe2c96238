//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
/// Cache capacity and timeout must be positive; the buffer constructor
/// rejects zero values outright rather than clamping them.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries each cache can hold
    pub cache_capacity: usize,
    /// Seconds a cached entry may go unrefreshed before it is dropped
    pub cache_timeout: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL of the MediaWiki action API
    pub wiki_api_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum entries per cache (default: 100)
    /// - `CACHE_TIMEOUT` - Entry timeout in seconds (default: 1000)
    /// - `SERVER_PORT` - HTTP server port (default: 4949)
    /// - `WIKI_API_URL` - MediaWiki api.php endpoint (default: English Wikipedia)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(100),
            cache_timeout: env::var("CACHE_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1000),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4949),
            wiki_api_url: env::var("WIKI_API_URL")
                .unwrap_or_else(|_| "https://en.wikipedia.org/w/api.php".to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: 100,
            cache_timeout: 1000,
            server_port: 4949,
            wiki_api_url: "https://en.wikipedia.org/w/api.php".to_string(),
        }
    }
}
