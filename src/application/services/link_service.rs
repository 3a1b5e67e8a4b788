//! Link creation, lookup and click counting.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Upper bound on candidate codes tried per creation.
pub const MAX_CODE_ATTEMPTS: usize = 10;

/// Service managing the lifecycle of affiliate links.
///
/// Uniqueness of short codes is checked against storage before insert, but the
/// storage-level unique constraint is the authoritative guarantee: a creation
/// that loses the race surfaces as [`AppError::DuplicateCode`].
pub struct LinkService<L: LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository> LinkService<L> {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for `original_url`.
    ///
    /// Surrounding whitespace is trimmed before the URL is stored.
    ///
    /// # Errors
    ///
    /// - [`AppError::Validation`] if the URL is empty, whitespace-only or
    ///   contains control characters (it must fit in a `Location` header)
    /// - [`AppError::CodeGenerationExhausted`] if every candidate collided
    /// - [`AppError::DuplicateCode`] if a concurrent insert took the code first
    /// - [`AppError::Storage`] on database errors
    pub async fn create_link(&self, original_url: &str) -> Result<Link, AppError> {
        let original_url = original_url.trim();
        if original_url.is_empty() {
            return Err(AppError::bad_request("original_url is required"));
        }
        if original_url.chars().any(char::is_control) {
            return Err(AppError::bad_request(
                "original_url must not contain control characters",
            ));
        }

        let short_code = self.generate_unique_code().await?;

        let link = self
            .link_repository
            .insert(NewLink {
                original_url: original_url.to_string(),
                short_code,
            })
            .await?;

        tracing::info!(id = link.id, short_code = %link.short_code, "link created");

        Ok(link)
    }

    /// Retrieves a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has this code.
    /// Returns [`AppError::Storage`] on database errors.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_short_code(code)
            .await?
            .ok_or_else(|| AppError::not_found(code))
    }

    /// Records one click for the link with the given id.
    ///
    /// An unknown id is silently ignored.
    pub async fn increment_click(&self, id: i64) -> Result<(), AppError> {
        self.link_repository.increment_click_count(id).await
    }

    /// Returns every link, newest first. Empty when nothing is stored.
    pub async fn get_all_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list_all().await
    }

    /// Returns the number of stored links.
    pub async fn count_links(&self) -> Result<i64, AppError> {
        self.link_repository.count().await
    }

    /// Relative path under which `link` redirects.
    pub fn short_path(&self, link: &Link) -> String {
        link.short_path()
    }

    /// Draws candidate codes until one is not yet stored.
    ///
    /// Attempts up to [`MAX_CODE_ATTEMPTS`] times before failing.
    async fn generate_unique_code(&self) -> Result<String, AppError> {
        for attempt in 1..=MAX_CODE_ATTEMPTS {
            let code = generate_code();

            if !self.link_repository.exists_by_short_code(&code).await? {
                return Ok(code);
            }

            tracing::warn!(attempt, "short code collision, retrying");
        }

        Err(AppError::CodeGenerationExhausted {
            attempts: MAX_CODE_ATTEMPTS,
        })
    }
}
