//! Repository trait for link storage.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage interface consumed by [`crate::application::services::LinkService`].
///
/// Implementations must enforce uniqueness of `short_code` themselves; the
/// service's existence check is only a fast path in front of that constraint.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteLinkRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_link.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link and returns it as stored.
    ///
    /// Storage assigns `id` and `created_at`; `click_count` starts at zero.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the short code is already taken.
    /// Returns [`AppError::Storage`] on database errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn find_by_short_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Atomically increments `click_count` by one.
    ///
    /// An unknown `id` updates nothing and is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn increment_click_count(&self, id: i64) -> Result<(), AppError>;

    /// Lists every link, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list_all(&self) -> Result<Vec<Link>, AppError>;

    /// Returns whether a link with this short code exists.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn exists_by_short_code(&self, code: &str) -> Result<bool, AppError>;

    /// Counts stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
