//! Cache Module
//!
//! Bounded LRU cache with write-back eviction to, and miss fill from, a backing store.

mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export public types
pub use entry::{validate_id, CacheEntry, EntryId};
pub use lru::LruMap;
pub use stats::CacheStats;
pub use store::{LruCache, WriteBack};
