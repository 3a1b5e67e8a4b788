//! Link entity representing a shortened affiliate URL.

use chrono::{DateTime, Utc};

/// A stored mapping from a short code to its original URL.
///
/// `id` and `created_at` are assigned by storage on insert. After creation the
/// only field that ever changes is `click_count`, and only by increments of one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub original_url: String,
    pub short_code: String,
    pub click_count: i64,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        original_url: String,
        short_code: String,
        click_count: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            original_url,
            short_code,
            click_count,
            created_at,
        }
    }

    /// Path under which the link redirects, e.g. `/a/Ab3dE9`.
    pub fn short_path(&self) -> String {
        format!("/a/{}", self.short_code)
    }
}

/// Input data for inserting a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub original_url: String,
    pub short_code: String,
}
