//! Click event model for asynchronous click counting.

/// A redirect that still has to be counted.
///
/// Sent from the redirect handler to [`crate::domain::click_worker::run_click_worker`]
/// over a bounded channel, so the redirect response never waits on the
/// counter update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    pub link_id: i64,
    pub short_code: String,
}

impl ClickEvent {
    /// Creates a new click event.
    pub fn new(link_id: i64, short_code: impl Into<String>) -> Self {
        Self {
            link_id,
            short_code: short_code.into(),
        }
    }
}
