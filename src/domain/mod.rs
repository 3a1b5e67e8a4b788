//! Domain layer containing business entities and the storage contract.
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click counting event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. The redirect handler resolves the short code
//! 2. A [`click_event::ClickEvent`] is pushed onto a bounded channel
//! 3. [`click_worker::run_click_worker`] applies the increment with retries
//! 4. The counter is updated atomically via [`repositories::LinkRepository`]

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
