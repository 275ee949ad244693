//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `POST /api/cache/add` - Add an item
//! - `POST /api/cache/get` - Retrieve an item
//! - `DELETE /api/cache/remove` - Remove an item from cache and store
//! - `DELETE /api/cache/removeAll` - Remove everything from cache and store
//! - `DELETE /api/cache/clear` - Clear the cache only
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint
//! - `GET /openapi.json`, `/swagger-ui` - API documentation

pub mod handlers;
pub mod openapi;
pub mod routes;

pub use handlers::*;
pub use openapi::ApiDoc;
pub use routes::create_router;
