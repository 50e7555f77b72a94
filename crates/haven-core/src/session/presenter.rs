//! Presentation boundary.
//!
//! The core never renders anything itself; it pushes state changes through
//! this seam. Production wires in a terminal presenter, tests wire in a
//! recorder.

use crate::persona::Persona;
use crate::thread::Message;

/// A synthesized greeting shown when a thread is opened with an empty
/// history. Presentation-only: never appended to the thread itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WelcomeTurn {
    /// Greeting line introducing the persona.
    pub greeting: String,
    /// Example prompts the user can pick to prefill the input.
    pub example_prompts: Vec<String>,
}

/// Outbound contract from the core to the presentation layer.
///
/// Implementations must not call back into the core from within these
/// methods; they are notifications, not dialogs.
pub trait Presenter: Send + Sync {
    /// Render the persona list view.
    fn show_persona_list(&self, personas: &[Persona]);

    /// Render a full thread view. `welcome` is set when the history is empty.
    fn show_thread(&self, persona: &Persona, history: &[Message], welcome: Option<&WelcomeTurn>);

    /// A single message was appended to the persona's thread.
    ///
    /// The thread may not be the visible one: an exchange resolves against
    /// the persona it was submitted to even if the user navigated away.
    fn message_appended(&self, persona_id: &str, message: &Message);

    /// Toggle the input affordances for an in-flight exchange.
    fn set_busy(&self, busy: bool);

    /// Prefill the input field without submitting.
    fn prefill_input(&self, text: &str);
}
