//! HTTP backend for the remote chat service.
//!
//! Implements the core's `CatalogSource` and `ChatTransport` seams over the
//! service's two endpoints: `GET /api/personas` (once at startup) and
//! `POST /api/chat` (one call per exchange).

use crate::dto::PersonasResponse;
use haven_core::error::{HavenError, Result};
use haven_core::persona::{CatalogSource, Persona};
use haven_core::session::{ChatReply, ChatRequest, ChatTransport};
use reqwest::Client;
use std::time::Duration;

/// Base URL used when no server is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// Client-side request deadline. The core enforces no timeout of its own;
/// without this, a stalled server would leave an exchange in flight forever.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// reqwest-backed implementation of the remote service interfaces.
#[derive(Debug, Clone)]
pub struct HttpChatBackend {
    client: Client,
    base_url: String,
}

impl HttpChatBackend {
    /// Creates a backend with the default request timeout.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Creates a backend with an explicit request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| HavenError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpChatBackend {
    async fn fetch_personas(&self) -> Result<Vec<Persona>> {
        let url = self.url("/api/personas");
        tracing::debug!("Fetching persona catalog from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| HavenError::catalog_fetch(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(HavenError::catalog_fetch(format!(
                "{url} answered with status {status}"
            )));
        }

        let body: PersonasResponse = response
            .json()
            .await
            .map_err(|e| HavenError::catalog_fetch(format!("Malformed persona list: {e}")))?;
        Ok(body.personas)
    }
}

#[async_trait::async_trait]
impl ChatTransport for HttpChatBackend {
    async fn send_chat(&self, request: &ChatRequest) -> Result<ChatReply> {
        let url = self.url("/api/chat");

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| HavenError::transport(format!("Chat request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "failed to read error body".to_string());
            tracing::warn!("Chat endpoint answered {}: {}", status, message);
            return Err(HavenError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| HavenError::transport(format!("Malformed chat reply: {e}")))
    }
}
