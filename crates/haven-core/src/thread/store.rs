//! Per-persona conversation threads.
//!
//! The store owns one append-only message history per persona id. Threads are
//! created lazily on first selection and retained for the whole session; all
//! mutation goes through [`ThreadStore::append`].

use super::message::Message;
use crate::error::{HavenError, Result};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A single conversation thread bound to one persona.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    /// Id of the persona this thread belongs to.
    pub persona_id: String,
    /// Append-only conversation history, in conversational order.
    pub history: Vec<Message>,
}

impl Thread {
    fn new(persona_id: String) -> Self {
        Self {
            persona_id,
            history: Vec::new(),
        }
    }
}

/// Owns every conversation thread in the session, keyed by persona id.
///
/// Shared between the coordinator and the exchange controller behind an
/// `Arc`; interior mutability through an async `RwLock` keeps reads cheap.
#[derive(Debug, Default)]
pub struct ThreadStore {
    threads: RwLock<HashMap<String, Thread>>,
}

impl ThreadStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures a thread exists for the persona, creating an empty one on
    /// first call. Idempotent: an existing thread is left untouched.
    pub async fn get_or_create(&self, persona_id: &str) -> Thread {
        let mut threads = self.threads.write().await;
        threads
            .entry(persona_id.to_string())
            .or_insert_with(|| Thread::new(persona_id.to_string()))
            .clone()
    }

    /// Appends a message to the persona's thread.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::UnknownPersona` if no thread was ever created for
    /// this id. In normal flow `get_or_create` always precedes `append`; this
    /// guard catches programmer errors rather than user input.
    pub async fn append(&self, persona_id: &str, message: Message) -> Result<()> {
        let mut threads = self.threads.write().await;
        let thread = threads
            .get_mut(persona_id)
            .ok_or_else(|| HavenError::unknown_persona(persona_id))?;
        thread.history.push(message);
        Ok(())
    }

    /// Returns a read view of the persona's history.
    ///
    /// The view is a clone; callers never mutate thread state directly.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::UnknownPersona` if no thread exists for this id.
    pub async fn history_of(&self, persona_id: &str) -> Result<Vec<Message>> {
        let threads = self.threads.read().await;
        threads
            .get(persona_id)
            .map(|t| t.history.clone())
            .ok_or_else(|| HavenError::unknown_persona(persona_id))
    }
}
