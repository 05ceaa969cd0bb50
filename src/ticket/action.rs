//! The four customer actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

/// An externally invokable operation on the machine.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    SelectTicket,
    InsertMoney,
    DispenseTicket,
    CancelTransaction,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::SelectTicket,
        Action::InsertMoney,
        Action::DispenseTicket,
        Action::CancelTransaction,
    ];

    /// Snake-case name, as used in logs and the recorded history.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectTicket => "select_ticket",
            Self::InsertMoney => "insert_money",
            Self::DispenseTicket => "dispense_ticket",
            Self::CancelTransaction => "cancel_transaction",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Action {
    type Err = ParseError;

    /// Accepts the short verbs (`select`, `pay`, `dispense`, `cancel`) as
    /// well as the full names in snake or kebab case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "select" | "select_ticket" => Ok(Self::SelectTicket),
            "pay" | "insert" | "insert_money" => Ok(Self::InsertMoney),
            "dispense" | "dispense_ticket" => Ok(Self::DispenseTicket),
            "cancel" | "cancel_transaction" => Ok(Self::CancelTransaction),
            _ => Err(ParseError::UnknownAction(s.to_string())),
        }
    }
}
