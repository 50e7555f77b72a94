//! Inbound UI events.

use serde::{Deserialize, Serialize};

/// Events the presentation layer dispatches into the session coordinator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// User picked a persona from the list view.
    PersonaSelected { id: String },
    /// User asked to return to the list view.
    BackRequested,
    /// User submitted input text.
    SubmitRequested { text: String },
    /// User picked an example prompt (prefills input, does not submit).
    ExampleChosen { text: String },
}
