//! Buffer Entry Module
//!
//! Defines the resident entry wrapper carrying last-refresh metadata.

use std::time::{SystemTime, UNIX_EPOCH};

// == Buffer Entry ==
/// A resident payload together with the time it was last refreshed.
///
/// "Refreshed" means inserted, fetched, touched, or replaced; every such
/// use resets the expiry clock.
#[derive(Debug, Clone)]
pub struct BufferEntry<T> {
    /// The stored payload
    pub payload: T,
    /// Last refresh timestamp (Unix milliseconds)
    pub last_refresh: u64,
}

impl<T> BufferEntry<T> {
    // == Constructor ==
    /// Creates a new entry refreshed at the current time.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            last_refresh: current_timestamp_ms(),
        }
    }

    // == Refresh ==
    /// Resets the expiry clock to the current time.
    pub fn refresh(&mut self) {
        self.last_refresh = current_timestamp_ms();
    }

    // == Is Expired ==
    /// Checks whether the entry has gone unrefreshed for `timeout_ms` or
    /// longer.
    ///
    /// Boundary condition: the entry is expired once the full timeout has
    /// elapsed, i.e. `now - last_refresh >= timeout_ms`. Strictly before
    /// that point it is resident.
    pub fn is_expired(&self, timeout_ms: u64) -> bool {
        current_timestamp_ms().saturating_sub(self.last_refresh) >= timeout_ms
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
