//! Wire DTOs for the remote chat service.

use haven_core::persona::Persona;
use serde::Deserialize;

/// Body of `GET /api/personas`.
#[derive(Debug, Clone, Deserialize)]
pub struct PersonasResponse {
    pub personas: Vec<Persona>,
}
