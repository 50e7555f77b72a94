//! Shared mock implementations for session tests.

use super::exchange::{ChatReply, ChatRequest, ChatTransport};
use super::presenter::{Presenter, WelcomeTurn};
use crate::error::{HavenError, Result};
use crate::persona::Persona;
use crate::thread::Message;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Transport mock answering from a fixed queue of replies.
///
/// When the queue is exhausted (or was never filled, see
/// [`QueueTransport::failing`]) calls fail with a transport error. Every
/// request is recorded for inspection.
pub struct QueueTransport {
    replies: Mutex<VecDeque<String>>,
    requests: Mutex<Vec<ChatRequest>>,
    gate: Option<Gate>,
}

struct Gate {
    entered: Arc<Notify>,
    release: Arc<Notify>,
}

impl QueueTransport {
    pub fn answering<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            replies: Mutex::new(replies.into_iter().map(Into::into).collect()),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// A transport whose every call fails.
    pub fn failing() -> Self {
        Self::answering(Vec::<String>::new())
    }

    /// A transport that signals `entered` when a call arrives and suspends
    /// until `release` is notified, holding the exchange in `Sending`.
    pub fn blocking(reply: impl Into<String>, entered: Arc<Notify>, release: Arc<Notify>) -> Self {
        let mut transport = Self::answering([reply.into()]);
        transport.gate = Some(Gate { entered, release });
        transport
    }

    pub fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl ChatTransport for QueueTransport {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        self.requests.lock().unwrap().push(request.clone());

        if let Some(gate) = &self.gate {
            gate.entered.notify_one();
            gate.release.notified().await;
        }

        let reply = self.replies.lock().unwrap().pop_front();
        match reply {
            Some(response) => Ok(ChatReply { response }),
            None => Err(HavenError::transport("simulated network failure")),
        }
    }
}

/// Presenter mock recording every notification it receives.
#[derive(Default)]
pub struct RecordingPresenter {
    busy: Mutex<Vec<bool>>,
    appended: Mutex<Vec<(String, Message)>>,
    threads: Mutex<Vec<ThreadView>>,
    lists: Mutex<Vec<Vec<String>>>,
    prefills: Mutex<Vec<String>>,
}

/// One recorded `show_thread` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThreadView {
    pub persona_id: String,
    pub history_len: usize,
    pub welcomed: bool,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn busy_toggles(&self) -> Vec<bool> {
        self.busy.lock().unwrap().clone()
    }

    pub fn appended(&self) -> Vec<(String, Message)> {
        self.appended.lock().unwrap().clone()
    }

    pub fn threads_shown(&self) -> Vec<ThreadView> {
        self.threads.lock().unwrap().clone()
    }

    pub fn lists_shown(&self) -> Vec<Vec<String>> {
        self.lists.lock().unwrap().clone()
    }

    pub fn prefills(&self) -> Vec<String> {
        self.prefills.lock().unwrap().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn show_persona_list(&self, personas: &[Persona]) {
        self.lists
            .lock()
            .unwrap()
            .push(personas.iter().map(|p| p.id.clone()).collect());
    }

    fn show_thread(&self, persona: &Persona, history: &[Message], welcome: Option<&WelcomeTurn>) {
        self.threads.lock().unwrap().push(ThreadView {
            persona_id: persona.id.clone(),
            history_len: history.len(),
            welcomed: welcome.is_some(),
        });
    }

    fn message_appended(&self, persona_id: &str, message: &Message) {
        self.appended
            .lock()
            .unwrap()
            .push((persona_id.to_string(), message.clone()));
    }

    fn set_busy(&self, busy: bool) {
        self.busy.lock().unwrap().push(busy);
    }

    fn prefill_input(&self, text: &str) {
        self.prefills.lock().unwrap().push(text.to_string());
    }
}
