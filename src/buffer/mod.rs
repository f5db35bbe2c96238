//! Finite-Space Finite-Time Buffer Module
//!
//! A bounded object cache that evicts the least recently used entry when
//! full and drops any entry that has gone unrefreshed past a timeout.
//! Expiry is checked lazily on access; no background task runs.

mod entry;
mod ledger;
mod shared;
mod stats;
mod store;


// Re-export public types
pub use entry::BufferEntry;
pub use ledger::RecencyLedger;
pub use shared::SharedBuffer;
pub use stats::BufferStats;
pub use store::FsftBuffer;

// == Public Constants ==
/// Default number of objects the buffer can hold
pub const DEFAULT_CAPACITY: usize = 32;

/// Default timeout in seconds before an unrefreshed object is dropped
pub const DEFAULT_TIMEOUT_SECS: u64 = 3600;

// == Bufferable Trait ==
/// Capability contract for values the buffer can store.
///
/// The identifier must stay stable for the object's lifetime inside the
/// buffer; it is the only thing the buffer requires of a payload.
pub trait Bufferable {
    /// Returns the identifier that uniquely identifies this value.
    fn id(&self) -> &str;
}
