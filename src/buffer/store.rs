//! Buffer Store Module
//!
//! The finite-space finite-time cache engine: a hash index paired with a
//! recency ledger, combining LRU capacity eviction with lazy time expiry.

use std::collections::HashMap;

use crate::buffer::{
    BufferEntry, BufferStats, Bufferable, RecencyLedger, DEFAULT_CAPACITY, DEFAULT_TIMEOUT_SECS,
};
use crate::error::BufferError;

// == FSFT Buffer ==
/// A bounded cache holding at most `capacity` payloads, each dropped once
/// it goes unrefreshed for `timeout` seconds.
///
/// Every public operation first purges expired entries, then performs its
/// effect. A read counts as a use: `get` refreshes the entry and moves it
/// to most-recent, delaying its expiry.
///
/// The index owns the canonical copy of every entry; the ledger orders the
/// same ids from least- to most-recently-used and is consulted only to
/// pick a victim when the buffer is full.
#[derive(Debug)]
pub struct FsftBuffer<T> {
    /// Id to entry storage
    index: HashMap<String, BufferEntry<T>>,
    /// Use-order tracker
    ledger: RecencyLedger,
    /// Activity counters
    stats: BufferStats,
    /// Maximum number of resident entries
    capacity: usize,
    /// Timeout in milliseconds before an unrefreshed entry is dropped
    timeout_ms: u64,
}

impl<T: Bufferable + Clone> FsftBuffer<T> {
    // == Constructor ==
    /// Creates a buffer with a fixed capacity and timeout.
    ///
    /// # Arguments
    /// * `capacity` - Number of objects the buffer can hold, must be > 0
    /// * `timeout_secs` - Seconds an object may go unrefreshed, must be > 0
    ///
    /// # Panics
    /// Panics if `capacity` or `timeout_secs` is zero. A non-positive
    /// bound is a programming error, not a recoverable condition.
    pub fn new(capacity: usize, timeout_secs: u64) -> Self {
        assert!(capacity > 0, "buffer capacity must be positive");
        assert!(timeout_secs > 0, "buffer timeout must be positive");

        Self {
            index: HashMap::new(),
            ledger: RecencyLedger::new(),
            stats: BufferStats::new(),
            capacity,
            timeout_ms: timeout_secs * 1000,
        }
    }

    /// Creates a buffer with the default capacity and timeout.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_CAPACITY, DEFAULT_TIMEOUT_SECS)
    }

    // == Put ==
    /// Adds a value to the buffer.
    ///
    /// Insert-only: returns false without mutating anything if an entry
    /// with the same id is already resident. If the buffer is full after
    /// the time-purge, the least recently used entry is evicted to make
    /// room. The new entry becomes most recently used.
    pub fn put(&mut self, payload: T) -> bool {
        self.purge_expired();

        let id = payload.id().to_string();
        if self.index.contains_key(&id) {
            self.check_rep();
            return false;
        }

        if self.index.len() == self.capacity {
            if let Some(victim) = self.ledger.pop_lru() {
                self.index.remove(&victim);
                self.stats.record_eviction();
            }
        }

        self.index.insert(id.clone(), BufferEntry::new(payload));
        self.ledger.record_use(&id);
        self.stats.set_resident_entries(self.index.len());

        self.check_rep();
        true
    }

    // == Get ==
    /// Retrieves a copy of the payload with the given id.
    ///
    /// A read is a use: the entry is refreshed and moved to most-recent,
    /// so fetching a value delays its expiry. Signals [`BufferError::NotFound`]
    /// if the id is absent or was just purged; never returns a placeholder.
    pub fn get(&mut self, id: &str) -> Result<T, BufferError> {
        self.purge_expired();

        match self.index.get_mut(id) {
            Some(entry) => {
                entry.refresh();
                let payload = entry.payload.clone();
                self.ledger.record_use(id);
                self.stats.record_hit();

                self.check_rep();
                Ok(payload)
            }
            None => {
                self.stats.record_miss();

                self.check_rep();
                Err(BufferError::NotFound(id.to_string()))
            }
        }
    }

    // == Touch ==
    /// Updates the last refresh time for the entry with the given id and
    /// marks it most recently used, leaving the payload unchanged.
    ///
    /// Returns false (a no-op) if the id is not resident; touching never
    /// creates an entry.
    pub fn touch(&mut self, id: &str) -> bool {
        self.purge_expired();

        let refreshed = match self.index.get_mut(id) {
            Some(entry) => {
                entry.refresh();
                self.ledger.record_use(id);
                true
            }
            None => false,
        };

        self.check_rep();
        refreshed
    }

    // == Update ==
    /// Replaces the payload for `payload.id()` in place, acting as a touch
    /// at the same time.
    ///
    /// Returns false without mutating anything if the id is not resident;
    /// update is not an upsert.
    pub fn update(&mut self, payload: T) -> bool {
        self.purge_expired();

        let id = payload.id().to_string();
        let replaced = match self.index.get_mut(&id) {
            Some(entry) => {
                entry.payload = payload;
                entry.refresh();
                self.ledger.record_use(&id);
                true
            }
            None => false,
        };

        self.check_rep();
        replaced
    }

    // == Stats ==
    /// Returns a snapshot of the buffer's activity counters.
    pub fn stats(&self) -> BufferStats {
        let mut stats = self.stats.clone();
        stats.set_resident_entries(self.index.len());
        stats
    }

    // == Length ==
    /// Returns the current number of resident entries.
    ///
    /// Counts entries that may already be past their timeout; residency is
    /// only re-checked by the purge step of the mutating operations.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    // == Is Empty ==
    /// Returns true if the buffer holds no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    // == Time Purge ==
    /// Removes every entry whose unrefreshed age has reached the timeout.
    ///
    /// Runs at the start of every public operation; may remove zero, one,
    /// or many entries.
    fn purge_expired(&mut self) {
        let expired_ids: Vec<String> = self
            .index
            .iter()
            .filter(|(_, entry)| entry.is_expired(self.timeout_ms))
            .map(|(id, _)| id.clone())
            .collect();

        for id in &expired_ids {
            self.index.remove(id);
            self.ledger.remove(id);
        }

        self.stats.record_expirations(expired_ids.len() as u64);
        self.stats.set_resident_entries(self.index.len());
    }

    // == Representation Invariant ==
    /// Checks the representation invariant. Debug builds only; compiles to
    /// a no-op in release builds.
    #[cfg(debug_assertions)]
    fn check_rep(&self) {
        assert_eq!(
            self.index.len(),
            self.ledger.len(),
            "index and ledger must track the same ids"
        );
        assert!(self.index.len() <= self.capacity);

        let mut previous_refresh = 0u64;
        for id in self.ledger.iter_lru_first() {
            let entry = self
                .index
                .get(id)
                .expect("every ledger id must have an index entry");
            assert!(
                entry.last_refresh >= previous_refresh,
                "ledger order must be non-decreasing in last refresh time"
            );
            previous_refresh = entry.last_refresh;
        }
    }

    #[cfg(not(debug_assertions))]
    #[inline]
    fn check_rep(&self) {}
}

impl<T: Bufferable + Clone> Default for FsftBuffer<T> {
    fn default() -> Self {
        Self::with_defaults()
    }
}
