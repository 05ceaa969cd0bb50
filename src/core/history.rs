//! State transition history tracking.
//!
//! Provides immutable tracking of applied transitions over time. Rejected
//! actions never reach the history: only state changes are recorded.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single applied transition.
///
/// # Example
///
/// ```rust
/// use ticket_machine::core::StateTransition;
/// use ticket_machine::ticket::MachineState;
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: MachineState::Idle,
///     to: MachineState::WaitingForMoney,
///     trigger: "select_ticket".to_string(),
///     timestamp: Utc::now(),
/// };
/// assert_eq!(transition.trigger, "select_ticket");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the action that caused the transition
    pub trigger: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of state transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use ticket_machine::core::{StateHistory, StateTransition};
/// use ticket_machine::ticket::MachineState;
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: MachineState::Idle,
///     to: MachineState::WaitingForMoney,
///     trigger: "select_ticket".to_string(),
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&MachineState::Idle, &MachineState::WaitingForMoney]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Append a transition to a history the caller owns.
    pub fn push(&mut self, transition: StateTransition<S>) {
        self.transitions.push(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns references to states in order: the first `from` state, then
    /// the `to` state of each transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticket::MachineState;

    fn transition(
        from: MachineState,
        to: MachineState,
        trigger: &str,
    ) -> StateTransition<MachineState> {
        StateTransition {
            from,
            to,
            trigger: trigger.to_string(),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<MachineState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(transition(
            MachineState::Idle,
            MachineState::WaitingForMoney,
            "select_ticket",
        ));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn push_appends_in_place() {
        let mut history = StateHistory::new();

        history.push(transition(
            MachineState::Idle,
            MachineState::WaitingForMoney,
            "select_ticket",
        ));
        history.push(transition(
            MachineState::WaitingForMoney,
            MachineState::Idle,
            "cancel_transaction",
        ));

        assert_eq!(history.len(), 2);
        assert_eq!(history.transitions()[1].trigger, "cancel_transaction");
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(
                MachineState::Idle,
                MachineState::WaitingForMoney,
                "select_ticket",
            ))
            .record(transition(
                MachineState::WaitingForMoney,
                MachineState::MoneyReceived,
                "insert_money",
            ))
            .record(transition(
                MachineState::MoneyReceived,
                MachineState::Idle,
                "dispense_ticket",
            ));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &MachineState::Idle,
                &MachineState::WaitingForMoney,
                &MachineState::MoneyReceived,
                &MachineState::Idle,
            ]
        );
    }

    #[test]
    fn duration_calculates_elapsed_time() {
        let history = StateHistory::new().record(transition(
            MachineState::Idle,
            MachineState::WaitingForMoney,
            "select_ticket",
        ));

        std::thread::sleep(std::time::Duration::from_millis(10));

        let history = history.record(transition(
            MachineState::WaitingForMoney,
            MachineState::Idle,
            "cancel_transaction",
        ));

        let duration = history.duration().unwrap();
        assert!(duration >= std::time::Duration::from_millis(10));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history = StateHistory::new().record(transition(
            MachineState::Idle,
            MachineState::WaitingForMoney,
            "select_ticket",
        ));

        assert_eq!(history.duration(), Some(std::time::Duration::from_secs(0)));
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(
            MachineState::TransactionCanceled,
            MachineState::Idle,
            "select_ticket",
        ));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<MachineState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.len(), 1);
        assert_eq!(deserialized.transitions()[0].from, MachineState::TransactionCanceled);
        assert_eq!(deserialized.transitions()[0].trigger, "select_ticket");
    }
}
