//! Handler for short link redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tokio::sync::mpsc::error::TrySendError;

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::code_generator::is_valid_code;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /a/{code}`
///
/// # Request Flow
///
/// 1. Reject codes that cannot have been generated
/// 2. Look the link up in storage
/// 3. Queue a click event for the background worker
/// 4. Return 307 Temporary Redirect
///
/// # Click Tracking
///
/// The click is counted asynchronously. If the queue is full or closed the
/// click is dropped with a warning; the redirect is still served.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    if !is_valid_code(&code) {
        return Err(AppError::not_found(code));
    }

    let link = state.link_service.get_link_by_code(&code).await?;

    let location = HeaderValue::from_bytes(link.original_url.as_bytes())
        .map_err(|_| AppError::bad_request("Stored URL is not a valid redirect target"))?;

    match state
        .click_sender
        .try_send(ClickEvent::new(link.id, link.short_code))
    {
        Ok(()) => {}
        Err(TrySendError::Full(event)) => {
            tracing::warn!(link_id = event.link_id, "click queue full, dropping click");
        }
        Err(TrySendError::Closed(event)) => {
            tracing::warn!(link_id = event.link_id, "click queue closed, dropping click");
        }
    }

    Ok((StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response())
}
