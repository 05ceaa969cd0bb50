//! Errors raised while reading user input.
//!
//! The machine itself cannot fail; these only cover names typed by a
//! caller that do not map to an action, state or language.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("unknown action '{0}' (expected one of: select, pay, dispense, cancel)")]
    UnknownAction(String),

    #[error("unknown state '{0}' (expected one of: idle, waiting-for-money, money-received, transaction-canceled)")]
    UnknownState(String),

    #[error("unknown language '{0}' (expected 'ru' or 'en')")]
    UnknownLanguage(String),
}
