//! Utility functions shared across layers.
//!
//! - [`code_generator`] - Short code generation and shape checks
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
