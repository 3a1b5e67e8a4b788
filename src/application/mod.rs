//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a plain API for HTTP
//! handlers, the click worker and the admin CLI.
//!
//! - [`services::link_service::LinkService`] - Link creation, lookup and click counting

pub mod services;
