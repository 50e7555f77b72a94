//! Haven core: the session/state manager of a multi-persona chat client.
//!
//! The core tracks one independent conversation thread per persona, drives
//! the lifecycle of a request/response exchange (optimistic local append,
//! in-flight busy state, success or fallback), and guarantees per-thread
//! ordering and history integrity. Rendering and transport are external
//! collaborators reached through the [`session::Presenter`] and
//! [`session::ChatTransport`] / [`persona::CatalogSource`] seams.

pub mod error;
pub mod persona;
pub mod session;
pub mod thread;

// Re-export common error type
pub use error::{HavenError, Result};
