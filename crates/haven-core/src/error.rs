//! Error types for the Haven client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for the Haven client core.
///
/// Exchange transport failures are the one family of errors the core recovers
/// from internally (they become a fallback assistant turn); every other
/// variant propagates to the caller.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum HavenError {
    /// Persona list could not be fetched or parsed at startup
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(String),

    /// Persona id absent from the catalog or thread store
    #[error("Unknown persona: '{id}'")]
    UnknownPersona { id: String },

    /// Submit attempted while no persona is selected
    #[error("No active session")]
    NoActiveSession,

    /// Transport-level failure (connection, timeout, malformed body)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Remote service answered with a non-success status
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl HavenError {
    /// Creates an UnknownPersona error
    pub fn unknown_persona(id: impl Into<String>) -> Self {
        Self::UnknownPersona { id: id.into() }
    }

    /// Creates a CatalogFetch error
    pub fn catalog_fetch(message: impl Into<String>) -> Self {
        Self::CatalogFetch(message.into())
    }

    /// Creates a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Check if this is an UnknownPersona error
    pub fn is_unknown_persona(&self) -> bool {
        matches!(self, Self::UnknownPersona { .. })
    }
}

/// A type alias for `Result<T, HavenError>`.
pub type Result<T> = std::result::Result<T, HavenError>;
