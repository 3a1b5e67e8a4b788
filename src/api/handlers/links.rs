//! Handlers for link creation and listing.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for an affiliate URL.
///
/// # Endpoint
///
/// `POST /links`
///
/// # Request Body
///
/// ```json
/// { "original_url": "https://example.com/product/123" }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// { "id": 1, "short_url": "/a/Ab3dE9" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if the body is not valid JSON or the URL is blank.
/// Returns 500 if no unique code could be allocated or storage fails.
pub async fn create_link_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateLinkResponse>), AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request(format!("Invalid JSON body: {}", rejection.body_text()))
    })?;
    payload.validate()?;

    let link = state.link_service.create_link(&payload.original_url).await?;

    let response = CreateLinkResponse {
        id: link.id,
        short_url: state.link_service.short_path(&link),
    };

    Ok((StatusCode::CREATED, Json(response)))
}

/// Lists every link, newest first.
///
/// # Endpoint
///
/// `GET /links`
///
/// Always returns a JSON array; `[]` when nothing has been created yet.
pub async fn list_links_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.get_all_links().await?;

    Ok(Json(links.into_iter().map(LinkResponse::from).collect()))
}
