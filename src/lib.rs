//! Ticket Machine: a vending-style ticket machine as a finite-state machine.
//!
//! The machine has four states and four customer actions. Every
//! `(state, action)` pair is answered by a pure lookup that yields a notice
//! for the customer and, unless the action is rejected, the next state.
//! The [`TicketMachine`] is the imperative shell around that table: it holds
//! the current state, emits notices and records applied transitions.
//!
//! # Core Concepts
//!
//! - **State**: plain data tags declared with [`state_enum!`]
//! - **Response**: the pure answer to an action, see [`ticket::respond`]
//! - **History**: immutable record of applied transitions
//!
//! # Example
//!
//! ```rust
//! use ticket_machine::{MachineState, Notice, TicketMachine};
//!
//! let mut machine = TicketMachine::with_notifier(Vec::new());
//!
//! machine.select_ticket();
//! let response = machine.cancel_transaction();
//!
//! assert_eq!(response.notice, Notice::TransactionCanceled);
//! assert_eq!(machine.current_state(), MachineState::Idle);
//! ```

pub mod core;
pub mod ticket;

// Re-export commonly used types
pub use core::{State, StateHistory, StateTransition};
pub use ticket::{Action, Language, MachineState, Notice, Response, TicketMachine};
