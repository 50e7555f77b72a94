//! Persona catalog.
//!
//! Loads the persona directory once at startup and serves read-only lookups
//! for the rest of the session.

use super::model::Persona;
use super::preset;
use crate::error::Result;

/// An abstract source for the persona directory.
///
/// This trait decouples the catalog from the specific transport (HTTP backend
/// in production, in-memory fixtures in tests).
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetches all available personas.
    ///
    /// # Errors
    ///
    /// Returns `HavenError::CatalogFetch` on network or parse failure.
    async fn fetch_personas(&self) -> Result<Vec<Persona>>;
}

/// Read-only directory of available personas.
///
/// Populated once via [`PersonaCatalog::load`] and immutable afterwards, so
/// it is safe to share behind an `Arc` without further locking.
#[derive(Debug, Clone)]
pub struct PersonaCatalog {
    personas: Vec<Persona>,
}

impl PersonaCatalog {
    /// Loads the catalog from a source, decorating each persona with the
    /// client-side preview and icon presets when the source left them empty.
    ///
    /// # Errors
    ///
    /// Propagates the source's `CatalogFetch` error; no retry is attempted.
    pub async fn load(source: &dyn CatalogSource) -> Result<Self> {
        let mut personas = source.fetch_personas().await?;
        for persona in &mut personas {
            if persona.preview.is_empty() {
                if let Some(preview) = preset::preview_for(&persona.id) {
                    persona.preview = preview.to_string();
                }
            }
            if persona.icon.is_empty() {
                persona.icon = preset::icon_for(&persona.id).to_string();
            }
        }
        tracing::debug!("Loaded {} personas", personas.len());
        Ok(Self { personas })
    }

    /// Builds a catalog directly from persona records.
    ///
    /// Intended for tests and offline fixtures; production code goes through
    /// [`PersonaCatalog::load`].
    pub fn from_personas(personas: Vec<Persona>) -> Self {
        Self { personas }
    }

    /// Looks up a persona by id.
    pub fn find(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    /// Returns all personas in catalog order.
    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }
}
