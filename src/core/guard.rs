//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether an event may
//! change a state. A guard that rejects leaves the state untouched; it
//! never signals an error.

use super::state::State;

/// Pure predicate over a state.
///
/// Guards wrap a plain function pointer so they can be declared as
/// `const` items next to the reducer that consults them.
///
/// # Example
///
/// ```rust
/// use bookfold::core::{Guard, State};
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///         }
///     }
/// }
///
/// fn is_closed(door: &Door) -> bool {
///     matches!(door, Door::Closed)
/// }
///
/// const CAN_OPEN: Guard<Door> = Guard::new(is_closed);
///
/// assert!(CAN_OPEN.check(&Door::Closed));
/// assert!(!CAN_OPEN.check(&Door::Open));
/// ```
pub struct Guard<S: State> {
    predicate: fn(&S) -> bool,
}

impl<S: State> Guard<S> {
    /// Create a guard from a pure predicate function.
    pub const fn new(predicate: fn(&S) -> bool) -> Self {
        Self { predicate }
    }

    /// Check if the guard allows a transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

impl<S: State> Clone for Guard<S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S: State> Copy for Guard<S> {}

impl<S: State> std::fmt::Debug for Guard<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
