//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Which backing store implementation the server persists evicted entries to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-process map with real "not found" semantics
    Memory,
    /// Stub store that echoes requested identities back on load
    Echo,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreBackend::Memory),
            "echo" => Ok(StoreBackend::Echo),
            other => Err(format!("unknown store backend '{}'", other)),
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of entries held in memory before LRU eviction
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Upper bound on any single backing store call, in milliseconds
    pub store_timeout_ms: u64,
    /// Backing store implementation
    pub store_backend: StoreBackend,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cached entries (default: 3, zero is ignored)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `STORE_TIMEOUT_MS` - Backing store call timeout (default: 2000)
    /// - `STORE_BACKEND` - `memory` or `echo` (default: memory)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            capacity: parse_var("CACHE_CAPACITY")
                .filter(|&c: &usize| c > 0)
                .unwrap_or(defaults.capacity),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            store_timeout_ms: parse_var("STORE_TIMEOUT_MS").unwrap_or(defaults.store_timeout_ms),
            store_backend: parse_var("STORE_BACKEND").unwrap_or(defaults.store_backend),
        }
    }

    /// Backing store timeout as a `Duration`.
    pub fn store_timeout(&self) -> Duration {
        Duration::from_millis(self.store_timeout_ms)
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse().ok())
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 3,
            server_port: 8080,
            store_timeout_ms: 2000,
            store_backend: StoreBackend::Memory,
        }
    }
}
