//! Persona domain model.
//!
//! Represents the conversational personas a user can chat with. Each persona
//! has stable identity and display metadata; the conversational behavior
//! itself lives on the remote service.

use serde::{Deserialize, Serialize};

/// A selectable conversational persona.
///
/// Personas are immutable after catalog load and owned by the
/// [`PersonaCatalog`](super::PersonaCatalog); everything else holds read-only
/// references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Persona {
    /// Unique, stable identifier (server-issued slug, e.g. "dawn")
    pub id: String,
    /// Display name of the persona
    pub name: String,
    /// Short tagline shown under the name in the thread header
    #[serde(default)]
    pub subtitle: String,
    /// Preview blurb shown in the persona list
    #[serde(default)]
    pub preview: String,
    /// Icon token for list and header rendering
    #[serde(default)]
    pub icon: String,
}
