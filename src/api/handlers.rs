//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. Handlers validate
//! the request body before touching the cache; cache errors map to status
//! codes through `CacheError`'s `IntoResponse`.

use std::future::Future;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

use axum::{extract::State, Json};
use tracing::info;

use crate::backing::{self, BackingStore};
use crate::cache::LruCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    ErrorResponse, HealthResponse, ItemRequest, ItemResponse, MessageResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The cache sits behind a single mutex: each operation's touch, eviction
/// and store call run as one critical section.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<Mutex<LruCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: LruCache) -> Self {
        Self {
            cache: Arc::new(Mutex::new(cache)),
        }
    }

    /// Creates a cache in front of `store` using the configured capacity and timeout.
    pub fn with_store(config: &Config, store: Arc<dyn BackingStore>) -> Result<Self> {
        let cache = LruCache::new(config.capacity, store, config.store_timeout())?;
        Ok(Self::new(cache))
    }

    /// Creates a new AppState from configuration, including the backing store.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::with_store(config, backing::from_backend(config.store_backend))
    }

    /// Runs `op` against the locked cache on its own task.
    ///
    /// The task owns the lock guard, so dropping the caller (client
    /// disconnect, caller timeout) cannot interrupt an operation between
    /// evicting an entry from memory and saving it to the store.
    pub async fn run<T, F, Fut>(&self, op: F) -> Result<T>
    where
        F: FnOnce(OwnedMutexGuard<LruCache>) -> Fut + Send + 'static,
        Fut: Future<Output = Result<T>> + Send + 'static,
        T: Send + 'static,
    {
        let cache = Arc::clone(&self.cache);
        tokio::spawn(async move {
            let guard = cache.lock_owned().await;
            op(guard).await
        })
        .await
        .map_err(|e| CacheError::Internal(format!("cache task failed: {}", e)))?
    }
}

/// Handler for POST /api/cache/add
#[utoipa::path(
    post,
    path = "/api/cache/add",
    tag = "Cache Manager",
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item added", body = MessageResponse),
        (status = 400, description = "Invalid id or content", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse),
    )
)]
pub async fn add_handler(
    State(state): State<AppState>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<MessageResponse>> {
    info!("Received add request for: {:?}", req);
    let entry = req.into_entry()?;
    let response = MessageResponse::added(&entry);

    state
        .run(move |mut cache| async move { cache.add(entry).await })
        .await?;

    Ok(Json(response))
}

/// Handler for POST /api/cache/get
#[utoipa::path(
    post,
    path = "/api/cache/get",
    tag = "Cache Manager",
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item from the cache or the backing store", body = ItemResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 404, description = "No record in the backing store", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse),
    )
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<ItemResponse>> {
    info!("Received get request for: {:?}", req);
    let id = req.validated_id()?;

    let entry = state
        .run(move |mut cache| async move { cache.get(id).await })
        .await?;

    Ok(Json(entry.into()))
}

/// Handler for DELETE /api/cache/remove
#[utoipa::path(
    delete,
    path = "/api/cache/remove",
    tag = "Cache Manager",
    request_body = ItemRequest,
    responses(
        (status = 200, description = "Item removed from cache and store", body = MessageResponse),
        (status = 400, description = "Invalid id", body = ErrorResponse),
        (status = 500, description = "Server error", body = ErrorResponse),
    )
)]
pub async fn remove_handler(
    State(state): State<AppState>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<MessageResponse>> {
    info!("Received remove request for: {:?}", req);
    let id = req.validated_id()?;

    state
        .run(move |mut cache| async move { cache.remove(id).await })
        .await?;

    Ok(Json(MessageResponse::removed(id)))
}

/// Handler for DELETE /api/cache/removeAll
///
/// Clears the cache and deletes every record in the backing store.
#[utoipa::path(
    delete,
    path = "/api/cache/removeAll",
    tag = "Cache Manager",
    responses(
        (status = 200, description = "Cache and store emptied", body = MessageResponse),
        (status = 500, description = "Server error", body = ErrorResponse),
    )
)]
pub async fn remove_all_handler(State(state): State<AppState>) -> Result<Json<MessageResponse>> {
    info!("Received removeAll request");
    state
        .run(|mut cache| async move { cache.clear_all().await })
        .await?;
    Ok(Json(MessageResponse::removed_all()))
}

/// Handler for DELETE /api/cache/clear
///
/// Clears the cache only; the backing store is left intact.
#[utoipa::path(
    delete,
    path = "/api/cache/clear",
    tag = "Cache Manager",
    responses((status = 200, description = "Cache cleared", body = MessageResponse))
)]
pub async fn clear_handler(State(state): State<AppState>) -> Json<MessageResponse> {
    info!("Received clear request");
    state.cache.lock().await.clear();
    Json(MessageResponse::cleared())
}

/// Handler for GET /stats
#[utoipa::path(
    get,
    path = "/stats",
    tag = "Operations",
    responses((status = 200, description = "Cache statistics", body = StatsResponse))
)]
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.lock().await;
    Json(StatsResponse::new(&cache.stats(), cache.capacity()))
}

/// Handler for GET /health
#[utoipa::path(
    get,
    path = "/health",
    tag = "Operations",
    responses((status = 200, description = "Server is healthy", body = HealthResponse))
)]
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
