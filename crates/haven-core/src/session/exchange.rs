//! The exchange state machine.
//!
//! One `submit` call drives a full request/response exchange:
//! `Idle -> Sending -> Settled(success | failure) -> Idle`. The controller
//! appends the user message optimistically before the network call, converts
//! any transport failure into a fallback assistant turn, and releases the
//! busy state exactly once on both branches.

use super::presenter::Presenter;
use crate::error::Result;
use crate::thread::{Message, ThreadStore};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Assistant turn appended when an exchange fails.
///
/// Failures degrade into ordinary conversation instead of propagating, so
/// the thread stays usable after a network hiccup.
pub const FALLBACK_REPLY: &str =
    "I apologize, but I encountered an error. Please try again in a moment.";

/// Outbound chat request payload.
///
/// `history` carries the thread as it stood *before* the user message of
/// this exchange was appended; the remote service adds the new message to
/// the model context itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's new message.
    pub message: String,
    /// Persona id the message is addressed to (wire name is historical).
    pub therapist_id: String,
    /// Prior conversation context for this thread.
    pub history: Vec<Message>,
}

/// Successful chat response payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatReply {
    /// The assistant's reply text.
    pub response: String,
}

/// An abstract transport for the chat endpoint.
///
/// Any error (connection, non-success status, malformed body) is treated the
/// same way by the controller: the exchange settles as a failure.
#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    /// Performs one request/response chat call.
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply>;
}

/// Why a submit call was rejected without starting an exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Input trimmed to the empty string.
    EmptyInput,
    /// Another exchange is already in flight (single-flight guard).
    Busy,
}

/// How a started exchange settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeOutcome {
    /// The remote service answered and its reply was appended.
    Answered,
    /// The exchange failed and the fallback turn was appended.
    Fallback,
}

/// Result of a `submit` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// An exchange ran to completion (successfully or via fallback).
    Completed(ExchangeOutcome),
    /// The call was a no-op: no history change, no network call.
    Rejected(RejectReason),
}

/// Releases the busy flag and notifies the presenter when dropped, so the
/// `Settled -> Idle` transition runs exactly once per submit regardless of
/// which branch settles the exchange.
struct BusyGuard<'a> {
    busy: &'a AtomicBool,
    presenter: &'a dyn Presenter,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::SeqCst);
        self.presenter.set_busy(false);
    }
}

/// Orchestrates a single send operation against the remote service.
///
/// The controller enforces single-flight semantics across the whole session:
/// only one exchange may be outstanding regardless of persona. There is no
/// cancellation and no internal timeout; a transport that never resolves
/// leaves the controller in `Sending` (the transport layer is expected to
/// impose its own deadline).
pub struct ExchangeController {
    store: Arc<ThreadStore>,
    transport: Arc<dyn ChatTransport>,
    presenter: Arc<dyn Presenter>,
    busy: AtomicBool,
}

impl ExchangeController {
    /// Creates a controller in the `Idle` state.
    pub fn new(
        store: Arc<ThreadStore>,
        transport: Arc<dyn ChatTransport>,
        presenter: Arc<dyn Presenter>,
    ) -> Self {
        Self {
            store,
            transport,
            presenter,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether an exchange is currently outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Runs one exchange for the persona's thread.
    ///
    /// Entry guards reject empty input and reentrant calls as observable
    /// no-ops. Transport failures never surface here; they settle the
    /// exchange as [`ExchangeOutcome::Fallback`].
    ///
    /// # Errors
    ///
    /// Returns `HavenError::UnknownPersona` if no thread was ever created
    /// for `persona_id` (the coordinator creates it at selection time).
    pub async fn submit(&self, persona_id: &str, text: &str) -> Result<SubmitOutcome> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Ok(SubmitOutcome::Rejected(RejectReason::EmptyInput));
        }

        // Single-flight guard: an explicit test-and-set at the state-machine
        // level, not just presentation-layer input disabling.
        if self.busy.swap(true, Ordering::SeqCst) {
            tracing::debug!("Submit rejected: exchange already in flight");
            return Ok(SubmitOutcome::Rejected(RejectReason::Busy));
        }
        let _guard = BusyGuard {
            busy: &self.busy,
            presenter: self.presenter.as_ref(),
        };
        self.presenter.set_busy(true);

        // Context for the remote call is the history before this exchange.
        let history = self.store.history_of(persona_id).await?;

        // Optimistic update: the user's own message is never lost, whatever
        // the network does.
        let user_message = Message::user(trimmed);
        self.store.append(persona_id, user_message.clone()).await?;
        self.presenter.message_appended(persona_id, &user_message);

        let request = ChatRequest {
            message: trimmed.to_string(),
            therapist_id: persona_id.to_string(),
            history,
        };

        let (reply, outcome) = match self.transport.send_chat(&request).await {
            Ok(reply) => (Message::assistant(reply.response), ExchangeOutcome::Answered),
            Err(err) => {
                tracing::warn!("Chat exchange failed, appending fallback turn: {}", err);
                (Message::assistant(FALLBACK_REPLY), ExchangeOutcome::Fallback)
            }
        };

        self.store.append(persona_id, reply.clone()).await?;
        self.presenter.message_appended(persona_id, &reply);

        Ok(SubmitOutcome::Completed(outcome))
    }
}
