//! Shared Buffer Module
//!
//! Thread-safe handle over the buffer engine. One coarse lock per buffer
//! instance makes each public operation an atomic unit, so the compound
//! check-then-act sequences inside put/get/touch/update are linearizable.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::buffer::{BufferStats, Bufferable, FsftBuffer};
use crate::error::BufferError;

// == Shared Buffer ==
/// Clonable, thread-safe handle to an [`FsftBuffer`].
///
/// Clones share the same underlying buffer. Callers block until their
/// operation can run to completion; no operation ever observes the index
/// and ledger in an intermediate state.
#[derive(Debug, Clone)]
pub struct SharedBuffer<T> {
    inner: Arc<Mutex<FsftBuffer<T>>>,
}

impl<T: Bufferable + Clone> SharedBuffer<T> {
    // == Constructor ==
    /// Creates a shared buffer with a fixed capacity and timeout.
    ///
    /// # Panics
    /// Panics if `capacity` or `timeout_secs` is zero.
    pub fn new(capacity: usize, timeout_secs: u64) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FsftBuffer::new(capacity, timeout_secs))),
        }
    }

    /// Creates a shared buffer with the default capacity and timeout.
    pub fn with_defaults() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FsftBuffer::with_defaults())),
        }
    }

    /// Locks the engine for one whole operation.
    ///
    /// A poisoned lock is recovered: the engine checks its invariants at
    /// the end of every operation, so a panicked holder cannot leave a
    /// torn representation behind.
    fn lock(&self) -> MutexGuard<'_, FsftBuffer<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // == Put ==
    /// Adds a value to the buffer. See [`FsftBuffer::put`].
    pub fn put(&self, payload: T) -> bool {
        self.lock().put(payload)
    }

    // == Get ==
    /// Retrieves a copy of the payload with the given id. See
    /// [`FsftBuffer::get`].
    pub fn get(&self, id: &str) -> Result<T, BufferError> {
        self.lock().get(id)
    }

    // == Touch ==
    /// Refreshes the entry with the given id. See [`FsftBuffer::touch`].
    pub fn touch(&self, id: &str) -> bool {
        self.lock().touch(id)
    }

    // == Update ==
    /// Replaces a resident payload in place. See [`FsftBuffer::update`].
    pub fn update(&self, payload: T) -> bool {
        self.lock().update(payload)
    }

    // == Stats ==
    /// Returns a snapshot of the buffer's activity counters.
    pub fn stats(&self) -> BufferStats {
        self.lock().stats()
    }

    // == Length ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the buffer holds no entries.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    #[derive(Debug, Clone)]
    struct Item {
        id: String,
        value: u32,
    }

    impl Item {
        fn new(id: &str, value: u32) -> Self {
            Self {
                id: id.to_string(),
                value,
            }
        }
    }

    impl Bufferable for Item {
        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_clones_share_state() {
        let buffer = SharedBuffer::new(10, 60);
        let other = buffer.clone();

        assert!(buffer.put(Item::new("a", 1)));
        assert_eq!(other.get("a").unwrap().value, 1);
    }

    #[test]
    fn test_concurrent_distinct_puts_all_land() {
        let thread_count = 16;
        let buffer = SharedBuffer::new(thread_count, 60);

        let handles: Vec<_> = (0..thread_count)
            .map(|i| {
                let buffer = buffer.clone();
                thread::spawn(move || buffer.put(Item::new(&format!("id{}", i), i as u32)))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap(), "every distinct put should succeed");
        }

        // Final resident set is exactly the N distinct ids
        assert_eq!(buffer.len(), thread_count);
        for i in 0..thread_count {
            assert!(buffer.get(&format!("id{}", i)).is_ok());
        }
    }

    #[test]
    fn test_concurrent_same_id_puts_insert_once() {
        let buffer = SharedBuffer::new(10, 60);

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let buffer = buffer.clone();
                thread::spawn(move || buffer.put(Item::new("contested", i)))
            })
            .collect();

        let wins = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&won| won)
            .count();

        // put is insert-only, so exactly one racing insert can win
        assert_eq!(wins, 1);
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_concurrent_mixed_operations_preserve_bounds() {
        let capacity = 8;
        let buffer = SharedBuffer::new(capacity, 60);

        let handles: Vec<_> = (0..4)
            .map(|t| {
                let buffer = buffer.clone();
                thread::spawn(move || {
                    for i in 0..50 {
                        let id = format!("id{}", (t * 13 + i) % 20);
                        match i % 4 {
                            0 => {
                                buffer.put(Item::new(&id, i));
                            }
                            1 => {
                                let _ = buffer.get(&id);
                            }
                            2 => {
                                buffer.touch(&id);
                            }
                            _ => {
                                buffer.update(Item::new(&id, i + 1));
                            }
                        }
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        assert!(buffer.len() <= capacity);

        // Every resident id is readable exactly once each
        let mut seen = HashSet::new();
        for i in 0..20 {
            let id = format!("id{}", i);
            if buffer.get(&id).is_ok() {
                assert!(seen.insert(id));
            }
        }
    }
}
