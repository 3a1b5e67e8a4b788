//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /links`     - Create a short link
//! - `GET  /links`     - List links, newest first
//! - `GET  /a/{code}`  - Redirect and count the click
//! - `GET  /health`    - Health check: database and click queue
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the routes with state and tracing applied.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::link_routes())
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application service served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(build_router(state))
}
