//! Session coordinator.
//!
//! The top-level façade binding the persona catalog, the thread store and the
//! exchange controller to the presentation boundary. Tracks the currently
//! active persona and dispatches UI events into core operations.

use super::event::UiEvent;
use super::exchange::{ChatTransport, ExchangeController, SubmitOutcome};
use super::presenter::{Presenter, WelcomeTurn};
use super::state::SessionState;
use crate::error::{HavenError, Result};
use crate::persona::PersonaCatalog;
use crate::thread::ThreadStore;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Example prompts offered alongside the welcome greeting of an empty thread.
const EXAMPLE_PROMPTS: [&str; 3] = [
    "I've been feeling overwhelmed at work lately...",
    "I need help working through a difficult decision...",
    "Could we have a casual chat? I just need someone to listen...",
];

/// Binds catalog, store and exchange controller together and owns the
/// "currently active persona" state.
///
/// Thread data always outlives navigation: deselecting a persona or selecting
/// another one never clears a history, and an in-flight exchange resolves
/// against the persona it was submitted to even if the user navigated away.
pub struct SessionCoordinator {
    catalog: PersonaCatalog,
    store: Arc<ThreadStore>,
    exchange: ExchangeController,
    presenter: Arc<dyn Presenter>,
    active_persona_id: RwLock<Option<String>>,
}

impl SessionCoordinator {
    /// Creates a coordinator over a loaded catalog.
    pub fn new(
        catalog: PersonaCatalog,
        transport: Arc<dyn ChatTransport>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        let store = Arc::new(ThreadStore::new());
        let exchange = ExchangeController::new(store.clone(), transport, presenter.clone());
        Self {
            catalog,
            store,
            exchange,
            presenter,
            active_persona_id: RwLock::new(None),
        }
    }

    /// Returns the loaded persona catalog.
    pub fn catalog(&self) -> &PersonaCatalog {
        &self.catalog
    }

    /// Snapshot of the current session state.
    pub async fn session(&self) -> SessionState {
        SessionState {
            active_persona_id: self.active_persona_id.read().await.clone(),
            busy: self.exchange.is_busy(),
        }
    }

    /// Dispatches an inbound UI event to the matching operation.
    ///
    /// Submit rejections (busy, empty input) are logged and swallowed here;
    /// callers that need the outcome use [`SessionCoordinator::handle_submit`]
    /// directly.
    pub async fn dispatch(&self, event: UiEvent) -> Result<()> {
        match event {
            UiEvent::PersonaSelected { id } => self.select_persona(&id).await,
            UiEvent::BackRequested => self.deselect().await,
            UiEvent::SubmitRequested { text } => {
                if let SubmitOutcome::Rejected(reason) = self.handle_submit(&text).await? {
                    tracing::debug!("Submit rejected: {:?}", reason);
                }
                Ok(())
            }
            UiEvent::ExampleChosen { text } => {
                self.handle_example_chosen(&text);
                Ok(())
            }
        }
    }

    /// Activates a persona, creating its thread on first selection, and asks
    /// the presenter to render the thread view.
    ///
    /// An empty history gets a synthesized welcome turn with the example
    /// prompts; the welcome is presentation-only and never persisted.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::UnknownPersona` if the id is not in the catalog.
    pub async fn select_persona(&self, id: &str) -> Result<()> {
        let persona = self
            .catalog
            .find(id)
            .cloned()
            .ok_or_else(|| HavenError::unknown_persona(id))?;

        *self.active_persona_id.write().await = Some(persona.id.clone());
        self.store.get_or_create(&persona.id).await;

        let history = self.store.history_of(&persona.id).await?;
        let welcome = if history.is_empty() {
            Some(WelcomeTurn {
                greeting: format!(
                    "Hi! I'm {}. I'm here to chat and support you. You can start with something like:",
                    persona.name
                ),
                example_prompts: EXAMPLE_PROMPTS.iter().map(|s| s.to_string()).collect(),
            })
        } else {
            None
        };

        tracing::debug!("Persona selected: {}", persona.id);
        self.presenter.show_thread(&persona, &history, welcome.as_ref());
        Ok(())
    }

    /// Returns to the list view. Thread data is retained.
    pub async fn deselect(&self) -> Result<()> {
        *self.active_persona_id.write().await = None;
        self.presenter.show_persona_list(self.catalog.personas());
        Ok(())
    }

    /// Delegates a submit to the exchange controller for the active persona.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::NoActiveSession` when no persona is selected.
    pub async fn handle_submit(&self, text: &str) -> Result<SubmitOutcome> {
        let persona_id = self
            .active_persona_id
            .read()
            .await
            .clone()
            .ok_or(HavenError::NoActiveSession)?;
        self.exchange.submit(&persona_id, text).await
    }

    /// Prefills the input with an example prompt; never submits.
    pub fn handle_example_chosen(&self, text: &str) {
        self.presenter.prefill_input(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persona::Persona;
    use crate::session::exchange::{ExchangeOutcome, RejectReason};
    use crate::session::test_support::{QueueTransport, RecordingPresenter};
    use crate::thread::Message;

    fn persona(id: &str, name: &str) -> Persona {
        Persona {
            id: id.to_string(),
            name: name.to_string(),
            subtitle: String::new(),
            preview: String::new(),
            icon: String::new(),
        }
    }

    fn coordinator_with(
        transport: Arc<QueueTransport>,
    ) -> (SessionCoordinator, Arc<RecordingPresenter>) {
        let catalog =
            PersonaCatalog::from_personas(vec![persona("dawn", "Dawn"), persona("alex", "Alex")]);
        let presenter = Arc::new(RecordingPresenter::new());
        let coordinator = SessionCoordinator::new(catalog, transport, presenter.clone());
        (coordinator, presenter)
    }

    #[tokio::test]
    async fn select_unknown_persona_fails() {
        let (coordinator, _presenter) =
            coordinator_with(Arc::new(QueueTransport::answering(["unused"])));
        let err = coordinator.select_persona("nobody").await.unwrap_err();
        assert!(err.is_unknown_persona());
        assert!(coordinator.session().await.active_persona_id.is_none());
    }

    #[tokio::test]
    async fn select_shows_welcome_only_for_empty_history() {
        let (coordinator, presenter) =
            coordinator_with(Arc::new(QueueTransport::answering(["hi there"])));

        coordinator.select_persona("dawn").await.unwrap();
        coordinator.handle_submit("hello").await.unwrap();
        coordinator.select_persona("dawn").await.unwrap();

        let views = presenter.threads_shown();
        assert_eq!(views.len(), 2);
        assert!(views[0].welcomed);
        assert_eq!(views[0].history_len, 0);
        assert!(!views[1].welcomed);
        assert_eq!(views[1].history_len, 2);
    }

    #[tokio::test]
    async fn successful_scenario_touches_only_the_selected_thread() {
        let transport = Arc::new(QueueTransport::answering(["hi there"]));
        let (coordinator, _presenter) = coordinator_with(transport);

        coordinator.select_persona("dawn").await.unwrap();
        // Ensure alex has a thread so its history is observable
        coordinator.select_persona("alex").await.unwrap();
        coordinator.select_persona("dawn").await.unwrap();

        let outcome = coordinator.handle_submit("hello").await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Completed(ExchangeOutcome::Answered));

        let dawn = coordinator.store.history_of("dawn").await.unwrap();
        assert_eq!(
            dawn,
            vec![Message::user("hello"), Message::assistant("hi there")]
        );
        assert!(coordinator.store.history_of("alex").await.unwrap().is_empty());
        assert!(!coordinator.session().await.busy);
    }

    #[tokio::test]
    async fn failure_scenario_leaves_session_usable() {
        let (coordinator, _presenter) = coordinator_with(Arc::new(QueueTransport::failing()));

        coordinator.select_persona("dawn").await.unwrap();
        let outcome = coordinator.handle_submit("hello").await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Completed(ExchangeOutcome::Fallback));

        let history = coordinator.store.history_of("dawn").await.unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], Message::user("hello"));
        assert!(!coordinator.session().await.busy);
    }

    #[tokio::test]
    async fn submit_without_active_persona_fails() {
        let (coordinator, _presenter) =
            coordinator_with(Arc::new(QueueTransport::answering(["unused"])));
        let err = coordinator.handle_submit("hello").await.unwrap_err();
        assert!(matches!(err, HavenError::NoActiveSession));
    }

    #[tokio::test]
    async fn deselect_returns_to_list_and_retains_threads() {
        let transport = Arc::new(QueueTransport::answering(["hi there"]));
        let (coordinator, presenter) = coordinator_with(transport);

        coordinator.select_persona("dawn").await.unwrap();
        coordinator.handle_submit("hello").await.unwrap();
        coordinator.deselect().await.unwrap();

        assert!(coordinator.session().await.active_persona_id.is_none());
        assert_eq!(presenter.lists_shown(), vec![vec!["dawn".to_string(), "alex".to_string()]]);
        // History survives navigation
        assert_eq!(coordinator.store.history_of("dawn").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn switching_personas_never_mutates_the_previous_thread() {
        let transport = Arc::new(QueueTransport::answering(["to dawn", "to alex"]));
        let (coordinator, _presenter) = coordinator_with(transport);

        coordinator.select_persona("dawn").await.unwrap();
        coordinator.handle_submit("hello dawn").await.unwrap();
        let dawn_before = coordinator.store.history_of("dawn").await.unwrap();

        coordinator.select_persona("alex").await.unwrap();
        coordinator.handle_submit("hello alex").await.unwrap();

        assert_eq!(
            coordinator.store.history_of("dawn").await.unwrap(),
            dawn_before
        );
        let alex = coordinator.store.history_of("alex").await.unwrap();
        assert_eq!(
            alex,
            vec![
                Message::user("hello alex"),
                Message::assistant("to alex")
            ]
        );
    }

    #[tokio::test]
    async fn example_chosen_prefills_without_submitting() {
        let transport = Arc::new(QueueTransport::answering(["unused"]));
        let (coordinator, presenter) = coordinator_with(transport.clone());

        coordinator.select_persona("dawn").await.unwrap();
        coordinator
            .dispatch(UiEvent::ExampleChosen {
                text: "I need help working through a difficult decision...".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(
            presenter.prefills(),
            vec!["I need help working through a difficult decision...".to_string()]
        );
        assert_eq!(transport.calls(), 0);
        assert!(coordinator.store.history_of("dawn").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn dispatch_swallows_submit_rejections() {
        let (coordinator, _presenter) =
            coordinator_with(Arc::new(QueueTransport::answering(["unused"])));
        coordinator.select_persona("dawn").await.unwrap();

        coordinator
            .dispatch(UiEvent::SubmitRequested {
                text: "   ".to_string(),
            })
            .await
            .unwrap();

        assert!(coordinator.store.history_of("dawn").await.unwrap().is_empty());
        let direct = coordinator.handle_submit("  ").await.unwrap();
        assert_eq!(direct, SubmitOutcome::Rejected(RejectReason::EmptyInput));
    }
}
