//! Cache Module
//!
//! Provides a bounded in-memory cache with FIFO eviction.

mod fifo;
mod stats;
mod store;


// Re-export public types
pub use fifo::FifoTracker;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Default number of entries when no cache size is given
pub const DEFAULT_CAPACITY: usize = 5000;

/// Upper bound on slots reserved up front; larger caches grow on demand
pub const MAX_PREALLOCATED_ENTRIES: usize = 64 * 1024;
