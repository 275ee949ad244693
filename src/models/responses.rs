//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use utoipa::ToSchema;

use crate::cache::{CacheEntry, CacheStats, EntryId};

/// Response body for a retrieved item (POST /api/cache/get)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ItemResponse {
    #[schema(value_type = u64, minimum = 1)]
    pub id: EntryId,
    pub content: String,
}

impl From<CacheEntry> for ItemResponse {
    fn from(entry: CacheEntry) -> Self {
        Self {
            id: entry.id,
            content: entry.content,
        }
    }
}

/// Confirmation body for mutating operations
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn added(entry: &CacheEntry) -> Self {
        Self::new(format!("CacheItem added: {}", entry))
    }

    pub fn removed(id: EntryId) -> Self {
        Self::new(format!("CacheItem removed: CacheItem{{id={}}}", id))
    }

    pub fn removed_all() -> Self {
        Self::new("All cache items removed from cache and database")
    }

    pub fn cleared() -> Self {
        Self::new("Cache cleared")
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Evictions whose write-back failed
    pub write_back_failures: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured capacity
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    pub fn new(stats: &CacheStats, capacity: usize) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            write_back_failures: stats.write_back_failures,
            total_entries: stats.total_entries,
            capacity,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_response_serialize() {
        let resp = ItemResponse::from(CacheEntry::new(1, "Content 1"));
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["content"], "Content 1");
    }

    #[test]
    fn test_added_message() {
        let resp = MessageResponse::added(&CacheEntry::new(1, "Content 1"));
        assert_eq!(
            resp.message,
            "CacheItem added: CacheItem{id=1, content='Content 1'}"
        );
    }

    #[test]
    fn test_added_and_removed_name_the_same_type() {
        let added = MessageResponse::added(&CacheEntry::new(4, "x"));
        let removed = MessageResponse::removed(4);

        assert_eq!(removed.message, "CacheItem removed: CacheItem{id=4}");
        assert!(added.message.contains("CacheItem{id=4"));
        assert!(!added.message.contains("CacheEntry"));
    }

    #[test]
    fn test_stats_response_hit_rate() {
        let stats = CacheStats {
            hits: 80,
            misses: 20,
            evictions: 5,
            write_back_failures: 1,
            total_entries: 3,
        };
        let resp = StatsResponse::new(&stats, 3);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.capacity, 3);
        assert_eq!(resp.write_back_failures, 1);
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let resp = ErrorResponse::new("Something went wrong");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
