//! OpenAPI document for the cache server, generated with utoipa from the
//! handler annotations and DTO schemas.

use utoipa::OpenApi;

use super::handlers;
use crate::models::{
    ErrorResponse, HealthResponse, ItemRequest, ItemResponse, MessageResponse, StatsResponse,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Data Cache API",
        version = "0.1.0",
        description = "Bounded LRU cache with write-back eviction to a backing store"
    ),
    tags(
        (name = "Cache Manager", description = "APIs for cache operations"),
        (name = "Operations", description = "Statistics and health checks")
    ),
    paths(
        handlers::add_handler,
        handlers::get_handler,
        handlers::remove_handler,
        handlers::remove_all_handler,
        handlers::clear_handler,
        handlers::stats_handler,
        handlers::health_handler,
    ),
    components(schemas(
        ItemRequest,
        ItemResponse,
        MessageResponse,
        StatsResponse,
        HealthResponse,
        ErrorResponse,
    ))
)]
pub struct ApiDoc;
