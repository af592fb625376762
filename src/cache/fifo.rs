//! FIFO Tracker Module
//!
//! Records insertion order for first-in-first-out eviction.

use std::collections::VecDeque;

// == FIFO Tracker ==
/// Tracks insertion order for FIFO eviction.
///
/// Keys are stored in a VecDeque where:
/// - Front = Oldest insertion
/// - Back = Newest insertion
///
/// Lookups never reorder keys.
#[derive(Debug, Default)]
pub struct FifoTracker {
    /// Keys in insertion order
    order: VecDeque<String>,
}

impl FifoTracker {
    // == Constructor ==
    /// Creates a new empty tracker.
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    /// Creates a tracker with room for `capacity` keys.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            order: VecDeque::with_capacity(capacity),
        }
    }

    // == Push ==
    /// Appends a newly inserted key at the newest position.
    ///
    /// The caller guarantees the key is not already tracked.
    pub fn push(&mut self, key: String) {
        self.order.push_back(key);
    }

    // == Evict Oldest ==
    /// Returns and removes the earliest inserted key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_front()
    }

    // == Peek Oldest ==
    /// Returns the earliest inserted key without removing it.
    #[allow(dead_code)]
    pub fn peek_oldest(&self) -> Option<&str> {
        self.order.front().map(String::as_str)
    }

    // == Length ==
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Iter ==
    /// Iterates keys from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }
}
