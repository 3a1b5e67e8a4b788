//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;

/// Request to create a short link.
///
/// A missing `original_url` deserializes as empty and is rejected by the
/// service with the same message as a blank one.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    #[serde(default)]
    #[validate(length(max = 2048, message = "original_url must be at most 2048 characters"))]
    pub original_url: String,
}

/// Response for a freshly created link.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLinkResponse {
    pub id: i64,
    /// Relative redirect path, e.g. `/a/Ab3dE9`.
    pub short_url: String,
}

/// JSON representation of a stored link.
#[derive(Debug, Serialize, Deserialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            original_url: link.original_url,
            short_code: link.short_code,
            click_count: link.click_count,
            created_at: link.created_at,
        }
    }
}
