//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use super::openapi::ApiDoc;
use super::handlers::{
    add_handler, clear_handler, get_handler, health_handler, remove_all_handler,
    remove_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `POST /api/cache/add` - Add or replace an item
/// - `POST /api/cache/get` - Retrieve an item, loading it from the store on a miss
/// - `DELETE /api/cache/remove` - Remove an item from the cache and the store
/// - `DELETE /api/cache/removeAll` - Empty the cache and the store
/// - `DELETE /api/cache/clear` - Empty the cache only
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check
/// - `GET /openapi.json` - OpenAPI document, browsable at `/swagger-ui`
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let cache_routes = Router::new()
        .route("/add", post(add_handler))
        .route("/get", post(get_handler))
        .route("/remove", delete(remove_handler))
        .route("/removeAll", delete(remove_all_handler))
        .route("/clear", delete(clear_handler));

    Router::new()
        .nest("/api/cache", cache_routes)
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .merge(SwaggerUi::new("/swagger-ui").url("/openapi.json", ApiDoc::openapi()))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
