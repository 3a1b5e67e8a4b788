//! SQLite repository implementations.
//!
//! - [`SqliteLinkRepository`] - Link storage and retrieval

pub mod sqlite_link_repository;

pub use sqlite_link_repository::SqliteLinkRepository;
