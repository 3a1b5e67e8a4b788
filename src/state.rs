//! Shared application state injected into every handler.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::application::services::LinkService;
use crate::domain::click_event::ClickEvent;
use crate::infrastructure::persistence::SqliteLinkRepository;

/// Link service backed by SQLite, as wired at startup.
pub type AppLinkService = LinkService<SqliteLinkRepository>;

/// Handler state.
///
/// Built once in [`crate::server::run`]; cloning only bumps reference counts.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<AppLinkService>,
    pub click_sender: mpsc::Sender<ClickEvent>,
}

impl AppState {
    pub fn new(link_service: Arc<AppLinkService>, click_sender: mpsc::Sender<ClickEvent>) -> Self {
        Self {
            link_service,
            click_sender,
        }
    }
}
