//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::cache::{CacheEntry, EntryId};
use crate::error::{CacheError, Result};

/// Request body naming a cache item (add, get, remove).
///
/// Both fields are optional at the wire level so a missing field surfaces as
/// a 400 with a descriptive message rather than an extractor rejection.
/// `id` is signed so negative ids are reported, not parse failures.
///
/// # Fields
/// - `id`: identity of the item, must be greater than 0
/// - `content`: payload, required and non-blank for add only
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct ItemRequest {
    #[serde(default)]
    #[schema(example = 1)]
    pub id: Option<i64>,
    #[serde(default)]
    #[schema(example = "Content 1")]
    pub content: Option<String>,
}

impl ItemRequest {
    /// Validates the identity and returns it.
    pub fn validated_id(&self) -> Result<EntryId> {
        let id = self.id.ok_or_else(|| CacheError::invalid("Id is required"))?;
        if id < 1 {
            return Err(CacheError::invalid("Id must be greater than 0"));
        }
        Ok(id as EntryId)
    }

    /// Validates identity and content and builds the entry to add.
    pub fn into_entry(self) -> Result<CacheEntry> {
        let id = self.validated_id()?;
        let content = self
            .content
            .ok_or_else(|| CacheError::invalid("Content must not be blank"))?;
        let entry = CacheEntry::new(id, content);
        entry.validate()?;
        Ok(entry)
    }
}
