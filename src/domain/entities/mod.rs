//! Core domain entities.
//!
//! - [`Link`] - a stored short-code to URL mapping with its click counter
//! - [`NewLink`] - the insert payload, before storage assigns id and timestamp

pub mod link;

pub use link::{Link, NewLink};
