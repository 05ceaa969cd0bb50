//! States of the ticket machine.

use std::fmt;
use std::str::FromStr;

use super::error::ParseError;

crate::state_enum! {
    /// The mode the machine is in. Carries no data of its own.
    ///
    /// `TransactionCanceled` has a full row in the transition table but no
    /// transition leads into it; it is only entered by constructing a
    /// machine in that state.
    #[derive(Default)]
    pub enum MachineState {
        #[default]
        Idle,
        WaitingForMoney,
        MoneyReceived,
        TransactionCanceled,
    }
    in_transaction: [WaitingForMoney, MoneyReceived]
}

impl fmt::Display for MachineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(crate::core::State::name(self))
    }
}

impl FromStr for MachineState {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_name(s).ok_or_else(|| ParseError::UnknownState(s.to_string()))
    }
}
