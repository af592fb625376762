//! Cache Store Module
//!
//! Bounded cache combining HashMap storage with FIFO eviction.

use std::collections::HashMap;

use tracing::trace;

use crate::cache::{CacheStats, FifoTracker, MAX_PREALLOCATED_ENTRIES};

// == Cache Store ==
/// Bounded key-value store with first-in-first-out eviction.
///
/// Values are never overwritten: once a key is present, later `set` calls for
/// it are ignored. Lookups do not affect eviction order.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, String>,
    /// Insertion order
    order: FifoTracker,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries allowed; 0 disables storage
    capacity: usize,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store holding at most `capacity` entries.
    ///
    /// A capacity of 0 yields a store that never keeps anything.
    pub fn new(capacity: usize) -> Self {
        let initial = capacity.min(MAX_PREALLOCATED_ENTRIES);
        Self {
            entries: HashMap::with_capacity(initial),
            order: FifoTracker::with_capacity(initial),
            stats: CacheStats::new(),
            capacity,
        }
    }

    // == Get ==
    /// Returns the stored value for `key`, without touching statistics.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    // == Lookup ==
    /// Like [`CacheStore::get`], but records a hit or miss.
    pub fn lookup(&mut self, key: &str) -> Option<String> {
        let value = self.entries.get(key).cloned();
        self.stats.record_lookup(value.is_some());
        value
    }

    // == Set ==
    /// Inserts `key` → `value` unless `key` is already present.
    ///
    /// At capacity, the earliest inserted key is evicted first. Returns
    /// whether the entry was stored.
    pub fn set(&mut self, key: String, value: String) -> bool {
        if self.capacity == 0 || self.entries.contains_key(&key) {
            return false;
        }

        if self.entries.len() >= self.capacity {
            if let Some(evicted_key) = self.order.evict_oldest() {
                trace!(key = %evicted_key, "Evicting oldest cache entry");
                self.entries.remove(&evicted_key);
                self.stats.record_eviction();
            }
        }

        self.order.push(key.clone());
        self.entries.insert(key, value);
        self.stats.set_total_entries(self.entries.len());
        true
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from oldest to newest insertion.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.order.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
