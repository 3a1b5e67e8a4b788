//! API route configuration.

use crate::api::handlers::{create_link_handler, list_links_handler, redirect_handler};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Link management and redirect routes.
///
/// # Endpoints
///
/// - `POST /links`     - Create a short link
/// - `GET  /links`     - List all links, newest first
/// - `GET  /a/{code}`  - Redirect to the original URL and count the click
pub fn link_routes() -> Router<AppState> {
    Router::new()
        .route("/links", get(list_links_handler).post(create_link_handler))
        .route("/a/{code}", get(redirect_handler))
}
