//! Core State trait for machine states.
//!
//! States are plain data. Everything a state knows about itself is exposed
//! through pure methods; how the machine reacts to an action lives in the
//! transition table, not in the state.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for machine states.
///
/// # Required Traits
///
/// - `Copy` + `Eq`: states are small tags compared during dispatch
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in the exported history
///
/// # Example
///
/// ```rust
/// use ticket_machine::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Closed,
///     Opening,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Closed => "Closed",
///             Self::Opening => "Opening",
///         }
///     }
///
///     fn in_transaction(&self) -> bool {
///         matches!(self, Self::Opening)
///     }
/// }
///
/// assert_eq!(DoorState::Closed.name(), "Closed");
/// assert!(DoorState::Opening.in_transaction());
/// ```
pub trait State:
    Copy + Eq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if a customer interaction is still open in this state.
    ///
    /// Default implementation returns `false`.
    fn in_transaction(&self) -> bool {
        false
    }
}
