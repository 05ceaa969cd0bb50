//! The ticket machine: one current state plus the imperative shell around
//! the pure transition table.

use std::io::{self, Write};

use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::action::Action;
use super::notice::{Language, Notice};
use super::state::MachineState;
use super::transition::{productive_actions, respond, Response};
use crate::core::{StateHistory, StateTransition};

/// Receives every notice the machine emits, one per action.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Prints each notice as a line on stdout.
///
/// A failed write (for example a closed pipe) is logged and the notice is
/// dropped; the machine keeps running.
#[derive(Clone, Copy, Debug, Default)]
pub struct Console {
    pub language: Language,
}

impl Console {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Write `notice` as one line to `out`.
    pub fn write_to<W: Write>(&self, out: &mut W, notice: Notice) -> io::Result<()> {
        writeln!(out, "{}", notice.text(self.language))
    }
}

impl Notifier for Console {
    fn notify(&mut self, notice: Notice) {
        if let Err(e) = self.write_to(&mut io::stdout().lock(), notice) {
            warn!(error = %e, ?notice, "failed to print notice");
        }
    }
}

/// Collects notices in order.
impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

/// Vending-style ticket machine.
///
/// Each of the four operations looks up the current state and action in the
/// transition table, emits the resulting notice and, unless the action was
/// rejected, moves to the next state. Rejections leave the state unchanged
/// and are never errors.
///
/// # Example
///
/// ```rust
/// use ticket_machine::ticket::{MachineState, Notice, TicketMachine};
///
/// let mut machine = TicketMachine::with_notifier(Vec::new());
///
/// machine.insert_money();
/// assert_eq!(machine.current_state(), MachineState::Idle);
///
/// machine.select_ticket();
/// machine.insert_money();
/// machine.dispense_ticket();
/// assert_eq!(machine.current_state(), MachineState::Idle);
///
/// assert_eq!(
///     machine.notifier(),
///     &vec![
///         Notice::SelectTicketFirst,
///         Notice::TicketSelected,
///         Notice::MoneyInserted,
///         Notice::TicketDispensed,
///     ]
/// );
/// ```
#[derive(Debug)]
pub struct TicketMachine<N: Notifier = Console> {
    id: Uuid,
    current: MachineState,
    history: StateHistory<MachineState>,
    notifier: N,
}

impl TicketMachine<Console> {
    /// Create an idle machine that prints notices in the default language.
    pub fn new() -> Self {
        Self::with_notifier(Console::default())
    }
}

impl Default for TicketMachine<Console> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: Notifier> TicketMachine<N> {
    /// Create an idle machine reporting to `notifier`.
    pub fn with_notifier(notifier: N) -> Self {
        Self {
            id: Uuid::new_v4(),
            current: MachineState::Idle,
            history: StateHistory::new(),
            notifier,
        }
    }

    /// Put a freshly built machine into `state`.
    ///
    /// This is the only way to reach `TransactionCanceled`.
    pub fn starting_in(mut self, state: MachineState) -> Self {
        self.current = state;
        self
    }

    pub fn select_ticket(&mut self) -> Response {
        self.dispatch(Action::SelectTicket)
    }

    pub fn insert_money(&mut self) -> Response {
        self.dispatch(Action::InsertMoney)
    }

    pub fn dispense_ticket(&mut self) -> Response {
        self.dispatch(Action::DispenseTicket)
    }

    pub fn cancel_transaction(&mut self) -> Response {
        self.dispatch(Action::CancelTransaction)
    }

    /// Apply `action` to the current state.
    ///
    /// Emits exactly one notice. Applied transitions are recorded in the
    /// history; rejections are not.
    pub fn dispatch(&mut self, action: Action) -> Response {
        let response = respond(self.current, action);

        match response.next {
            Some(next) => {
                info!(
                    session = %self.id,
                    action = action.name(),
                    from = %self.current,
                    to = %next,
                    "transition applied"
                );
                self.history.push(StateTransition {
                    from: self.current,
                    to: next,
                    trigger: action.name().to_string(),
                    timestamp: Utc::now(),
                });
                self.current = next;
            }
            None => {
                debug!(
                    session = %self.id,
                    action = action.name(),
                    state = %self.current,
                    notice = ?response.notice,
                    "action rejected"
                );
            }
        }

        self.notifier.notify(response.notice);
        response
    }

    pub fn current_state(&self) -> MachineState {
        self.current
    }

    /// Actions that would change the state right now.
    pub fn available_actions(&self) -> Vec<Action> {
        productive_actions(self.current)
    }

    pub fn history(&self) -> &StateHistory<MachineState> {
        &self.history
    }

    /// Session id, attached to every log line of this machine.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn into_notifier(self) -> N {
        self.notifier
    }
}
