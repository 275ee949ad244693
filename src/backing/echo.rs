//! Stub backing store that never reports "not found".
//!
//! Mirrors a placeholder database layer: every call is logged, saved records
//! are remembered, and loading an unknown identity echoes it back with
//! placeholder content instead of failing.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tracing::info;

use super::BackingStore;
use crate::cache::{CacheEntry, EntryId};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct EchoStore {
    saved: Mutex<HashMap<EntryId, CacheEntry>>,
}

impl EchoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content returned for identities the store has never seen.
    pub fn placeholder(id: EntryId) -> CacheEntry {
        CacheEntry::new(id, format!("Content {}", id))
    }

    fn saved(&self) -> MutexGuard<'_, HashMap<EntryId, CacheEntry>> {
        self.saved.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl BackingStore for EchoStore {
    async fn save(&self, entry: &CacheEntry) -> Result<()> {
        info!("Saving to database: {}", entry);
        self.saved().insert(entry.id, entry.clone());
        Ok(())
    }

    async fn load(&self, id: EntryId) -> Result<Option<CacheEntry>> {
        info!("Retrieving from database: id={}", id);
        Ok(Some(
            self.saved()
                .get(&id)
                .cloned()
                .unwrap_or_else(|| Self::placeholder(id)),
        ))
    }

    async fn delete(&self, id: EntryId) -> Result<()> {
        info!("Removing from database: id={}", id);
        self.saved().remove(&id);
        Ok(())
    }

    async fn delete_all(&self) -> Result<()> {
        info!("Removing all items from the database");
        self.saved().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_unknown_echoes_id() {
        let store = EchoStore::new();
        let loaded = store.load(9).await.unwrap();
        assert_eq!(loaded, Some(EchoStore::placeholder(9)));
    }

    #[tokio::test]
    async fn test_load_returns_saved_content() {
        let store = EchoStore::new();
        store.save(&CacheEntry::new(2, "real")).await.unwrap();

        let loaded = store.load(2).await.unwrap().unwrap();
        assert_eq!(loaded.content, "real");
    }

    #[tokio::test]
    async fn test_delete_all_falls_back_to_echo() {
        let store = EchoStore::new();
        store.save(&CacheEntry::new(2, "real")).await.unwrap();
        store.delete_all().await.unwrap();

        let loaded = store.load(2).await.unwrap().unwrap();
        assert_eq!(loaded.content, "Content 2");
    }
}
