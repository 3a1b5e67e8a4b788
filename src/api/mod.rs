//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into [`crate::application::services::LinkService`]
//! calls and formats the results as JSON.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
