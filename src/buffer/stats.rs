//! Buffer Statistics Module
//!
//! Tracks buffer activity: hits, misses, capacity evictions, and expiries.

use serde::Serialize;

// == Buffer Stats ==
/// Activity counters for one buffer instance.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BufferStats {
    /// Number of successful reads
    pub hits: u64,
    /// Number of failed reads (id absent or just expired)
    pub misses: u64,
    /// Number of entries evicted to make room at capacity
    pub evictions: u64,
    /// Number of entries dropped by the time-purge
    pub expirations: u64,
    /// Current number of resident entries
    pub resident_entries: usize,
}

impl BufferStats {
    // == Constructor ==
    /// Creates a new BufferStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no reads have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Eviction ==
    /// Increments the capacity-eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    // == Record Expirations ==
    /// Adds to the expiry counter.
    pub fn record_expirations(&mut self, count: u64) {
        self.expirations += count;
    }

    // == Update Entry Count ==
    /// Updates the resident entry count.
    pub fn set_resident_entries(&mut self, count: usize) {
        self.resident_entries = count;
    }
}
