//! Session state domain model.

use serde::{Deserialize, Serialize};

/// Snapshot of the UI-session state.
///
/// `active_persona_id` is `None` while the persona list view is showing and
/// `Some` while a thread is displayed. `busy` is true for the duration of
/// exactly one in-flight exchange; concurrent sends are rejected, never
/// queued.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    /// Id of the currently displayed persona, if any.
    pub active_persona_id: Option<String>,
    /// Whether an exchange is currently outstanding.
    pub busy: bool,
}

impl SessionState {
    /// Creates the initial state: list view, not busy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the active persona id, if any.
    pub fn active_persona_id(&self) -> Option<&str> {
        self.active_persona_id.as_deref()
    }
}
