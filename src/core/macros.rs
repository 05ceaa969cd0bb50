//! Macro for declaring state enums.

/// Declare a state enum and implement [`State`](crate::core::State) for it.
///
/// Besides the trait impl, the generated type gets:
/// - `ALL`: every variant in declaration order
/// - `parse_name`: name lookup ignoring case, `_`, `-` and whitespace
///
/// # Example
///
/// ```
/// use ticket_machine::core::State;
/// use ticket_machine::state_enum;
///
/// state_enum! {
///     pub enum TurnstileState {
///         Locked,
///         Unlocked,
///     }
///     in_transaction: [Unlocked]
/// }
///
/// assert_eq!(TurnstileState::ALL.len(), 2);
/// assert_eq!(TurnstileState::parse_name("unlocked"), Some(TurnstileState::Unlocked));
/// assert!(TurnstileState::Unlocked.in_transaction());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(in_transaction: [$($busy:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// Look a variant up by name.
            pub fn parse_name(input: &str) -> Option<Self> {
                let wanted: String = input
                    .chars()
                    .filter(|c| *c != '_' && *c != '-' && !c.is_whitespace())
                    .flat_map(char::to_lowercase)
                    .collect();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|state| $crate::core::State::name(state).to_lowercase() == wanted)
            }
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn in_transaction(&self) -> bool {
                match self {
                    $($(Self::$busy => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }
    };
}
