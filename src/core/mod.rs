//! Core state machine types.
//!
//! This module contains the pure, ticket-agnostic part of the crate:
//! - State definitions via the `State` trait
//! - The `state_enum!` macro for declaring state enums
//! - Immutable history tracking

mod history;
mod macros;
mod state;

pub use history::{StateHistory, StateTransition};
pub use state::State;
