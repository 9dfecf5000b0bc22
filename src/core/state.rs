//! Core State trait for aggregate states.
//!
//! Every aggregate state implements this trait, which provides pure
//! methods for inspecting the active variant without side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for aggregate states.
///
/// All methods are pure. States are immutable values describing where an
/// aggregate currently sits in its lifecycle; evolving an aggregate produces
/// a new state rather than modifying the old one.
///
/// # Required Traits
///
/// - `Clone`: states are handed out by value from a fold
/// - `PartialEq`: replays are compared structurally
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states cross the caller boundary as data
///
/// # Example
///
/// ```rust
/// use bookfold::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Ticket {
///     Open,
///     Closed,
/// }
///
/// impl State for Ticket {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Closed)
///     }
/// }
///
/// assert_eq!(Ticket::Open.name(), "Open");
/// assert!(Ticket::Closed.is_final());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Variant tag for display and logging.
    ///
    /// The tag is a stable, human-readable identifier. It is never used
    /// for dispatch.
    fn name(&self) -> &str;

    /// Check if this is a final (terminal) state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Check if this is an error state.
    ///
    /// Default implementation returns `false`.
    fn is_error(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Pending,
        Active { label: String },
        Archived,
        Broken,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Pending => "Pending",
                Self::Active { .. } => "Active",
                Self::Archived => "Archived",
                Self::Broken => "Broken",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Archived | Self::Broken)
        }

        fn is_error(&self) -> bool {
            matches!(self, Self::Broken)
        }
    }

    #[test]
    fn name_ignores_payload() {
        let a = TestState::Active {
            label: "first".to_string(),
        };
        let b = TestState::Active {
            label: "second".to_string(),
        };
        assert_eq!(a.name(), b.name());
        assert_ne!(a, b);
    }

    #[test]
    fn is_final_identifies_terminal_states() {
        assert!(!TestState::Pending.is_final());
        assert!(TestState::Archived.is_final());
        assert!(TestState::Broken.is_final());
    }

    #[test]
    fn is_error_identifies_error_states() {
        assert!(!TestState::Pending.is_error());
        assert!(!TestState::Archived.is_error());
        assert!(TestState::Broken.is_error());
    }

    #[test]
    fn state_serializes_correctly() {
        let state = TestState::Active {
            label: "x".to_string(),
        };
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TestState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, deserialized);
    }
}
