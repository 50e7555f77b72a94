//! Session domain module.
//!
//! # Module Structure
//!
//! - `state`: session state snapshot (`SessionState`)
//! - `event`: inbound UI events (`UiEvent`)
//! - `presenter`: outbound presentation seam (`Presenter`, `WelcomeTurn`)
//! - `exchange`: the Idle/Sending/Settled exchange state machine
//!   (`ExchangeController`, `ChatTransport`, wire payloads)
//! - `coordinator`: top-level façade (`SessionCoordinator`)

mod coordinator;
mod event;
mod exchange;
mod presenter;
mod state;

#[cfg(test)]
mod test_support;

pub use coordinator::SessionCoordinator;
pub use event::UiEvent;
pub use exchange::{
    ChatReply, ChatRequest, ChatTransport, ExchangeController, ExchangeOutcome, FALLBACK_REPLY,
    RejectReason, SubmitOutcome,
};
pub use presenter::{Presenter, WelcomeTurn};
pub use state::SessionState;
