//! Backing Store Module
//!
//! Durable key-value persistence sitting behind the LRU cache. The cache
//! writes evicted entries here and falls back to it on a miss.
//!
//! # Implementations
//! - [`MemoryStore`]: in-process map with real "not found" semantics
//! - [`EchoStore`]: stub that never reports "not found"

mod echo;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::cache::{CacheEntry, EntryId};
use crate::config::StoreBackend;
use crate::error::Result;

pub use echo::EchoStore;
pub use memory::MemoryStore;

// == Backing Store Trait ==
/// Contract the cache relies on for durable state.
///
/// The store is the sole owner of durable state; its answer to `load` is
/// authoritative. Implementations report transport or storage failures as
/// `CacheError::StoreUnavailable`.
#[async_trait]
pub trait BackingStore: Send + Sync {
    /// Persists the entry under its identity, overwriting any previous record.
    async fn save(&self, entry: &CacheEntry) -> Result<()>;

    /// Returns the persisted entry, or `None` if the store has no record.
    async fn load(&self, id: EntryId) -> Result<Option<CacheEntry>>;

    /// Removes any record for the identity. Deleting an absent identity is not an error.
    async fn delete(&self, id: EntryId) -> Result<()>;

    /// Removes every record.
    async fn delete_all(&self) -> Result<()>;
}

/// Builds the configured store implementation.
pub fn from_backend(backend: StoreBackend) -> Arc<dyn BackingStore> {
    match backend {
        StoreBackend::Memory => Arc::new(MemoryStore::new()),
        StoreBackend::Echo => Arc::new(EchoStore::new()),
    }
}
