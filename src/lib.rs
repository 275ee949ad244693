//! Data Cache - A bounded LRU cache server with write-back eviction
//!
//! Holds a fixed number of items in memory. Evicted items are written back to
//! a backing store, and misses are loaded from it.

pub mod api;
pub mod backing;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use backing::BackingStore;
pub use cache::{CacheEntry, LruCache};
pub use config::Config;
pub use error::{CacheError, Result};
