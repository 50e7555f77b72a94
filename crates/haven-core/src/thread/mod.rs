//! Conversation thread domain module.
//!
//! - `message`: message roles and records (`MessageRole`, `Message`)
//! - `store`: per-persona thread ownership (`Thread`, `ThreadStore`)

mod message;
mod store;

pub use message::{Message, MessageRole};
pub use store::{Thread, ThreadStore};
