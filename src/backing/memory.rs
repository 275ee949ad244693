//! In-process backing store.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use super::BackingStore;
use crate::cache::{CacheEntry, EntryId};
use crate::error::Result;

/// Backing store over a `HashMap`, reporting absent identities as `None`.
///
/// Every write is a single map call, so a panic elsewhere while the lock is
/// held cannot leave a half-applied record; poisoned locks are recovered.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<EntryId, CacheEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of persisted records.
    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.read().contains_key(&id)
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<EntryId, CacheEntry>> {
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<EntryId, CacheEntry>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BackingStore for MemoryStore {
    async fn save(&self, entry: &CacheEntry) -> Result<()> {
        debug!("Saving to store: {}", entry);
        self.write().insert(entry.id, entry.clone());
        Ok(())
    }

    async fn load(&self, id: EntryId) -> Result<Option<CacheEntry>> {
        debug!("Loading from store: id={}", id);
        Ok(self.read().get(&id).cloned())
    }

    async fn delete(&self, id: EntryId) -> Result<()> {
        debug!("Deleting from store: id={}", id);
        self.write().remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        debug!("Deleting all records from store");
        self.write().clear();
        Ok(())
    }
}
