//! Cache Entry Module
//!
//! Defines the item held by the cache and persisted by the backing store.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{CacheError, Result};

/// Identity of a cache entry. Valid identities are positive.
pub type EntryId = u64;

// == Cache Entry ==
/// A single cached item: a positive identity plus a text payload.
///
/// Equality and hashing consider only `id`, so two entries with the same
/// identity but different content are the same cache slot. Callers update an
/// entry by adding a replacement, never by mutating one in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    /// Unique identity, the cache key
    pub id: EntryId,
    /// Non-blank text payload
    pub content: String,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry. Use [`CacheEntry::validate`] before handing it to the cache.
    pub fn new(id: EntryId, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
        }
    }

    // == Validate ==
    /// Checks the identity is positive and the content is not blank.
    pub fn validate(&self) -> Result<()> {
        validate_id(self.id)?;
        if self.content.trim().is_empty() {
            return Err(CacheError::invalid("Content must not be blank"));
        }
        Ok(())
    }
}

/// Rejects the zero identity.
pub fn validate_id(id: EntryId) -> Result<()> {
    if id == 0 {
        return Err(CacheError::invalid("Id must be greater than 0"));
    }
    Ok(())
}

impl PartialEq for CacheEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CacheEntry {}

impl Hash for CacheEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for CacheEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CacheItem{{id={}, content='{}'}}", self.id, self.content)
    }
}
