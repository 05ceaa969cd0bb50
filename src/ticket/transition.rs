//! The transition table.
//!
//! Every `(state, action)` pair is defined here as a pure function result.
//! Nothing in this module touches a machine: callers decide what to do with
//! the returned [`Response`].

use super::action::Action;
use super::notice::Notice;
use super::state::MachineState;

/// Outcome of applying an action in a given state.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Response {
    /// Message for the customer
    pub notice: Notice,
    /// State to move to; `None` when the action is rejected
    pub next: Option<MachineState>,
}

impl Response {
    fn moves_to(next: MachineState, notice: Notice) -> Self {
        Self {
            notice,
            next: Some(next),
        }
    }

    fn rejects(notice: Notice) -> Self {
        Self { notice, next: None }
    }

    /// A rejection is a no-op reported only through its notice.
    pub fn is_rejection(&self) -> bool {
        self.next.is_none()
    }

    /// State the machine ends up in when this response is applied in `current`.
    pub fn resulting_state(&self, current: MachineState) -> MachineState {
        self.next.unwrap_or(current)
    }
}

/// Look up how the machine answers `action` while in `state`.
pub fn respond(state: MachineState, action: Action) -> Response {
    use Action::*;
    use MachineState::*;

    match (state, action) {
        (Idle, SelectTicket) => Response::moves_to(WaitingForMoney, Notice::TicketSelected),
        (Idle, InsertMoney) => Response::rejects(Notice::SelectTicketFirst),
        (Idle, DispenseTicket) => Response::rejects(Notice::SelectAndPayFirst),
        (Idle, CancelTransaction) => Response::rejects(Notice::NothingToCancel),

        (WaitingForMoney, SelectTicket) => Response::rejects(Notice::AwaitingMoney),
        (WaitingForMoney, InsertMoney) => Response::moves_to(MoneyReceived, Notice::MoneyInserted),
        (WaitingForMoney, DispenseTicket) => Response::rejects(Notice::PayFirst),
        (WaitingForMoney, CancelTransaction) => {
            Response::moves_to(Idle, Notice::TransactionCanceled)
        }

        (MoneyReceived, SelectTicket) => Response::rejects(Notice::AlreadySelected),
        (MoneyReceived, InsertMoney) => Response::rejects(Notice::AlreadyPaid),
        (MoneyReceived, DispenseTicket) => Response::moves_to(Idle, Notice::TicketDispensed),
        (MoneyReceived, CancelTransaction) => Response::moves_to(Idle, Notice::MoneyRefunded),

        (TransactionCanceled, SelectTicket) => Response::moves_to(Idle, Notice::SelectAgain),
        (TransactionCanceled, InsertMoney) => Response::rejects(Notice::StartOver),
        (TransactionCanceled, DispenseTicket) => Response::rejects(Notice::CannotDispense),
        (TransactionCanceled, CancelTransaction) => Response::rejects(Notice::AlreadyCanceled),
    }
}

/// Actions that would change the state if applied in `state`.
pub fn productive_actions(state: MachineState) -> Vec<Action> {
    Action::ALL
        .into_iter()
        .filter(|action| !respond(state, *action).is_rejection())
        .collect()
}
