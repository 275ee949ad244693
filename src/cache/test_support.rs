//! Test doubles for exercising the cache against an observable backing store.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use crate::backing::{BackingStore, MemoryStore};
use crate::cache::{CacheEntry, EntryId};
use crate::error::{CacheError, Result};

/// Memory store that records every call and can be told to fail or stall.
#[derive(Debug, Default)]
pub struct RecordingStore {
    inner: MemoryStore,
    saves: Mutex<Vec<CacheEntry>>,
    loads: Mutex<Vec<EntryId>>,
    deletes: Mutex<Vec<EntryId>>,
    delete_alls: AtomicUsize,
    pub fail_saves: AtomicBool,
    pub fail_loads: AtomicBool,
    pub fail_deletes: AtomicBool,
    pub stall_loads: AtomicBool,
    pub slow_saves: AtomicBool,
}

impl RecordingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a record without counting it as a save.
    pub async fn seed(&self, entry: CacheEntry) {
        self.inner.save(&entry).await.unwrap();
    }

    pub fn saves(&self) -> Vec<CacheEntry> {
        self.saves.lock().unwrap().clone()
    }

    pub fn saved_ids(&self) -> Vec<EntryId> {
        self.saves().iter().map(|e| e.id).collect()
    }

    pub fn loads(&self) -> Vec<EntryId> {
        self.loads.lock().unwrap().clone()
    }

    pub fn deletes(&self) -> Vec<EntryId> {
        self.deletes.lock().unwrap().clone()
    }

    pub fn delete_alls(&self) -> usize {
        self.delete_alls.load(Ordering::SeqCst)
    }

    pub fn persisted(&self, id: EntryId) -> bool {
        self.inner.contains(id)
    }
}

fn unavailable(op: &str) -> CacheError {
    CacheError::StoreUnavailable(format!("{} failed", op))
}

#[async_trait]
impl BackingStore for RecordingStore {
    async fn save(&self, entry: &CacheEntry) -> Result<()> {
        if self.slow_saves.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_millis(300)).await;
        }
        self.saves.lock().unwrap().push(entry.clone());
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(unavailable("save"));
        }
        self.inner.save(entry).await
    }

    async fn load(&self, id: EntryId) -> Result<Option<CacheEntry>> {
        self.loads.lock().unwrap().push(id);
        if self.stall_loads.load(Ordering::SeqCst) {
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(unavailable("load"));
        }
        self.inner.load(id).await
    }

    async fn delete(&self, id: EntryId) -> Result<()> {
        self.deletes.lock().unwrap().push(id);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(unavailable("delete"));
        }
        self.inner.delete(id).await
    }

    async fn delete_all(&self) -> Result<()> {
        self.delete_alls.fetch_add(1, Ordering::SeqCst);
        if self.fail_deletes.load(Ordering::SeqCst) {
            return Err(unavailable("delete_all"));
        }
        self.inner.delete_all().await
    }
}
