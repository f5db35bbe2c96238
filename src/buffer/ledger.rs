//! Recency Ledger Module
//!
//! Tracks the use order of resident ids for least-recently-used eviction.

use std::collections::VecDeque;

// == Recency Ledger ==
/// Total order over resident ids from least- to most-recently-used.
///
/// Ids are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Ledger position, not raw timestamps, decides the eviction victim; this
/// keeps the order unambiguous when several entries share a coarse
/// millisecond refresh time.
#[derive(Debug, Default)]
pub struct RecencyLedger {
    /// Ids ordered by last use
    order: VecDeque<String>,
}

impl RecencyLedger {
    // == Constructor ==
    /// Creates a new empty ledger.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Record Use ==
    /// Marks an id as most recently used (moves to front).
    ///
    /// If the id is already tracked it is removed first, so each id
    /// appears at most once.
    pub fn record_use(&mut self, id: &str) {
        self.remove(id);
        self.order.push_front(id.to_string());
    }

    // == Remove ==
    /// Removes an id from the ledger.
    pub fn remove(&mut self, id: &str) {
        self.order.retain(|k| k != id);
    }

    // == Pop LRU ==
    /// Returns and removes the least recently used id.
    ///
    /// Returns None if the ledger is empty.
    pub fn pop_lru(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Peek LRU ==
    /// Returns the least recently used id without removing it.
    pub fn peek_lru(&self) -> Option<&String> {
        self.order.back()
    }

    // == Length ==
    /// Returns the number of tracked ids.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Contains ==
    /// Checks if an id is being tracked.
    pub fn contains(&self, id: &str) -> bool {
        self.order.iter().any(|k| k == id)
    }

    // == Iterate Oldest First ==
    /// Iterates ids from least- to most-recently-used.
    pub fn iter_lru_first(&self) -> impl Iterator<Item = &String> {
        self.order.iter().rev()
    }
}
