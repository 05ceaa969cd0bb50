//! The ticket machine itself.
//!
//! - [`MachineState`]: the four modes of the machine
//! - [`Action`]: the four customer operations
//! - [`respond`]: the pure `(state, action) -> Response` table
//! - [`TicketMachine`]: holds the current state and applies responses

mod action;
mod error;
mod machine;
mod notice;
mod state;
mod transition;

pub use action::Action;
pub use error::ParseError;
pub use machine::{Console, Notifier, TicketMachine};
pub use notice::{Language, Notice};
pub use state::MachineState;
pub use transition::{productive_actions, respond, Response};
