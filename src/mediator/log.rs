//! Request Log Module
//!
//! Records mediator traffic for the analytics operations: all-time query
//! ranking, a 30-second trending window, and peak request load.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Duration, Utc};

/// Width of the trending and peak-load windows.
const WINDOW_SECS: i64 = 30;

// == Request Log ==
/// Shared, append-only log of mediator requests.
///
/// Query events (search and page lookups) carry the requested string and
/// also count toward load; analytics calls count toward load only.
#[derive(Debug, Clone, Default)]
pub struct RequestLog {
    inner: Arc<Mutex<LogInner>>,
}

#[derive(Debug, Default)]
struct LogInner {
    /// Query strings with their request times, in arrival order
    queries: Vec<(DateTime<Utc>, String)>,
    /// Times of every request made to the mediator, in arrival order
    loads: Vec<DateTime<Utc>>,
}

impl RequestLog {
    // == Constructor ==
    /// Creates a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, LogInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Record Query ==
    /// Records a search or page request for the given string.
    pub fn record_query(&self, query: &str) {
        self.record_query_at(query, Utc::now());
    }

    fn record_query_at(&self, query: &str, at: DateTime<Utc>) {
        let mut inner = self.lock();
        inner.queries.push((at, query.to_string()));
        inner.loads.push(at);
    }

    // == Record Load ==
    /// Records a request that carries no query string (analytics calls).
    pub fn record_load(&self) {
        self.record_load_at(Utc::now());
    }

    fn record_load_at(&self, at: DateTime<Utc>) {
        self.lock().loads.push(at);
    }

    // == Zeitgeist ==
    /// Returns up to `limit` query strings ranked by all-time request
    /// count, most requested first. Ties break alphabetically so the
    /// ranking is deterministic.
    pub fn zeitgeist(&self, limit: usize) -> Vec<String> {
        let inner = self.lock();

        let mut counts: HashMap<&str, usize> = HashMap::new();
        for (_, query) in &inner.queries {
            *counts.entry(query.as_str()).or_insert(0) += 1;
        }

        let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        ranked
            .into_iter()
            .take(limit)
            .map(|(query, _)| query.to_string())
            .collect()
    }

    // == Trending ==
    /// Returns up to `limit` distinct query strings requested within the
    /// last 30 seconds, most recent first.
    pub fn trending(&self, limit: usize) -> Vec<String> {
        self.trending_at(limit, Utc::now())
    }

    fn trending_at(&self, limit: usize, now: DateTime<Utc>) -> Vec<String> {
        let window_start = now - Duration::seconds(WINDOW_SECS);
        let inner = self.lock();

        let mut seen: Vec<String> = Vec::new();
        for (at, query) in inner.queries.iter().rev() {
            if *at < window_start {
                break;
            }
            if !seen.contains(query) {
                seen.push(query.clone());
            }
            if seen.len() == limit {
                break;
            }
        }

        seen
    }

    // == Peak Load ==
    /// Returns the maximum number of requests observed in any 30-second
    /// window over the life of the log.
    pub fn peak_load_30s(&self) -> usize {
        let inner = self.lock();
        let loads = &inner.loads;

        // Appends are made under the lock at their own Utc::now, so the
        // vec is non-decreasing; slide a window over it.
        let mut peak = 0;
        let mut start = 0;
        for (end, at) in loads.iter().enumerate() {
            let window_start = *at - Duration::seconds(WINDOW_SECS);
            while loads[start] < window_start {
                start += 1;
            }
            peak = peak.max(end - start + 1);
        }

        peak
    }
}
