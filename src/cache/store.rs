//! LRU Cache Engine
//!
//! Bounded in-memory cache in front of a [`BackingStore`]: overflow evicts the
//! least recently used entry and writes it back to the store, and a miss loads
//! from the store and re-populates the cache.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::backing::BackingStore;
use crate::cache::{validate_id, CacheEntry, CacheStats, EntryId, LruMap};
use crate::error::{CacheError, Result};

// == Write-Back Outcome ==
/// Result of persisting an evicted entry.
///
/// Eviction is best-effort: the entry has already left memory when the save
/// runs, so a failure is recorded and reported but never undone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteBack {
    Persisted(CacheEntry),
    Failed { entry: CacheEntry, error: CacheError },
}

// == LRU Cache ==
/// Bounded cache with write-back-on-evict and load-on-miss.
///
/// Every operation takes `&mut self`: touching an entry, evicting and calling
/// the store form one critical section. Shared callers wrap the cache in a
/// single mutex and drive each operation to completion on its own task
/// (see `AppState::run`), so an eviction is never cut off before its save.
pub struct LruCache {
    /// Entries in recency order
    entries: LruMap,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries held in memory
    capacity: usize,
    /// Durable tier
    store: Arc<dyn BackingStore>,
    /// Upper bound on each store call
    store_timeout: Duration,
}

impl fmt::Debug for LruCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruCache")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("stats", &self.stats)
            .field("store_timeout", &self.store_timeout)
            .finish()
    }
}

impl LruCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// `InvalidArgument` if `capacity` is zero.
    pub fn new(
        capacity: usize,
        store: Arc<dyn BackingStore>,
        store_timeout: Duration,
    ) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::invalid("Capacity must be at least 1"));
        }
        Ok(Self {
            entries: LruMap::with_capacity(capacity + 1),
            stats: CacheStats::new(),
            capacity,
            store,
            store_timeout,
        })
    }

    // == Add ==
    /// Inserts or replaces an entry and marks it most recently used.
    ///
    /// If the cache overflows, the least recently used entry is evicted and
    /// saved to the store. A failed save is logged and counted, and the add
    /// still succeeds.
    ///
    /// # Errors
    /// `InvalidArgument` for a zero id or blank content; nothing is mutated.
    pub async fn add(&mut self, entry: CacheEntry) -> Result<()> {
        entry.validate()?;

        info!("Added to cache: {}", entry);
        self.entries.insert(entry);
        self.evict_overflow().await;
        Ok(())
    }

    // == Get ==
    /// Returns the entry for `id`, loading it from the store on a miss.
    ///
    /// A hit marks the entry most recently used. A miss inserts the loaded
    /// entry as most recently used, evicting exactly as [`LruCache::add`] does.
    ///
    /// # Errors
    /// - `InvalidArgument` for a zero id
    /// - `NotFound` if the store has no record
    /// - `StoreUnavailable` if the load fails or times out
    pub async fn get(&mut self, id: EntryId) -> Result<CacheEntry> {
        validate_id(id)?;

        if let Some(found) = self.entries.get(id).cloned() {
            self.stats.record_hit();
            info!("Found in cache: {}", found);
            return Ok(found);
        }

        self.stats.record_miss();
        let loaded = self
            .call_store("load", self.store.load(id))
            .await?
            .ok_or(CacheError::NotFound(id))?;

        if loaded.id != id {
            return Err(CacheError::Internal(format!(
                "store returned {} for id {}",
                loaded, id
            )));
        }

        info!("Loaded into cache from store: {}", loaded);
        self.entries.insert(loaded.clone());
        self.evict_overflow().await;
        Ok(loaded)
    }

    // == Remove ==
    /// Removes `id` from memory (if cached) and from the store (always).
    ///
    /// # Errors
    /// `InvalidArgument` for a zero id; store failures propagate. The
    /// in-memory removal is kept even if the store delete fails.
    pub async fn remove(&mut self, id: EntryId) -> Result<()> {
        validate_id(id)?;

        if let Some(removed) = self.entries.remove(id) {
            info!("Removed from cache: {}", removed);
        }
        self.stats.set_total_entries(self.entries.len());

        self.call_store("delete", self.store.delete(id)).await
    }

    // == Clear ==
    /// Empties the in-memory cache only. The store is left untouched, so
    /// every later `get` is a miss that reloads from it.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
        info!("Cache cleared, store remains intact");
    }

    // == Clear All ==
    /// Empties the in-memory cache, then deletes every record in the store.
    pub async fn clear_all(&mut self) -> Result<()> {
        self.entries.clear();
        self.stats.set_total_entries(0);
        info!("Cleared all entries from cache");

        self.call_store("delete_all", self.store.delete_all()).await
    }

    // == Eviction ==
    /// Evicts the LRU entry if the cache is over capacity and writes it back.
    ///
    /// Inserts add at most one entry, so at most one eviction is needed.
    async fn evict_overflow(&mut self) -> Option<WriteBack> {
        let outcome = if self.entries.len() > self.capacity {
            match self.entries.pop_lru() {
                Some(evicted) => {
                    self.stats.record_eviction();
                    info!("Evicting item from cache: {}", evicted);
                    Some(self.write_back(evicted).await)
                }
                None => None,
            }
        } else {
            None
        };

        if let Some(WriteBack::Failed { entry, error }) = &outcome {
            warn!("Error saving evicted item {}: {}", entry, error);
            self.stats.record_write_back_failure();
        }
        self.stats.set_total_entries(self.entries.len());
        outcome
    }

    async fn write_back(&self, entry: CacheEntry) -> WriteBack {
        match self.call_store("save", self.store.save(&entry)).await {
            Ok(()) => WriteBack::Persisted(entry),
            Err(error) => WriteBack::Failed { entry, error },
        }
    }

    /// Runs a store call under the configured timeout.
    async fn call_store<T>(
        &self,
        op: &'static str,
        call: impl Future<Output = Result<T>>,
    ) -> Result<T> {
        debug!("Backing store call: {}", op);
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::StoreUnavailable(format!(
                "{} timed out after {}ms",
                op,
                self.store_timeout.as_millis()
            ))),
        }
    }

    // == Accessors ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Checks membership without touching recency.
    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.contains(id)
    }

    /// Copies the cached entries, least recently used first.
    pub fn snapshot(&self) -> Vec<CacheEntry> {
        self.entries.iter().cloned().collect()
    }
}
