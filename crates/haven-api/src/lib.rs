//! HTTP transport layer for the Haven chat client.

mod client;
mod dto;

pub use client::{DEFAULT_BASE_URL, HttpChatBackend};
pub use dto::PersonasResponse;
