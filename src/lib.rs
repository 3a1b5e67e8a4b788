//! # Affiliate Links
//!
//! A minimal affiliate-link shortener: turns a long URL into a six-character
//! code, redirects visitors from `/a/{code}` to the original URL and counts
//! every redirect.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The `Link` entity, the storage trait and click events
//! - **Application Layer** ([`application`]) - Code allocation and link lifecycle
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite pool, migrations and repository
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Short Code Uniqueness
//!
//! Candidate codes are checked against storage before insert (up to ten
//! attempts). The `UNIQUE` constraint on `links.short_code` is the actual
//! guarantee; a creation that loses a race fails with
//! [`AppError::DuplicateCode`].
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://affiliate.db"   # Optional
//! cargo run
//!
//! curl -X POST localhost:8080/links -d '{"original_url":"https://example.com/product/123"}' \
//!      -H 'content-type: application/json'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
