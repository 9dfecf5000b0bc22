//! State transition history tracking.
//!
//! A history is the trail a replay leaves behind: one transition per
//! applied event, in log order. Histories are immutable; recording returns
//! a new history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single evolution step.
///
/// `from` and `to` are equal when the event was a no-op for `from`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state the event was applied to
    pub from: S,
    /// The state the event produced
    pub to: S,
    /// Tag of the applied event
    pub event: String,
    /// Sequence number of the event in its log
    pub sequence: u64,
    /// When the event was recorded
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// True when the event left the state unchanged.
    pub fn is_noop(&self) -> bool {
        self.from == self.to
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use bookfold::core::{State, StateHistory, StateTransition};
/// use serde::{Deserialize, Serialize};
/// use chrono::Utc;
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Phase { One, Two, Three }
///
/// impl State for Phase {
///     fn name(&self) -> &str {
///         match self {
///             Self::One => "One",
///             Self::Two => "Two",
///             Self::Three => "Three",
///         }
///     }
/// }
///
/// let history = StateHistory::new()
///     .record(StateTransition {
///         from: Phase::One,
///         to: Phase::Two,
///         event: "Advanced".to_string(),
///         sequence: 1,
///         timestamp: Utc::now(),
///     })
///     .record(StateTransition {
///         from: Phase::Two,
///         to: Phase::Three,
///         event: "Advanced".to_string(),
///         sequence: 2,
///         timestamp: Utc::now(),
///     });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::One, &Phase::Two, &Phase::Three]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
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
    /// The receiver is left unchanged.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the first transition's `from` state followed by the `to`
    /// state of every transition. No-op steps show up as repeated states.
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

    /// State after the last recorded transition.
    pub fn last_state(&self) -> Option<&S> {
        self.transitions.last().map(|t| &t.to)
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions, or if the log's clock ran
    /// backwards between the first and last event.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.transitions.first(), self.transitions.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all transitions in order.
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
    use chrono::TimeZone;

    #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
    enum TestState {
        Initial,
        Processing,
        Complete,
    }

    impl State for TestState {
        fn name(&self) -> &str {
            match self {
                Self::Initial => "Initial",
                Self::Processing => "Processing",
                Self::Complete => "Complete",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Complete)
        }
    }

    fn at(seconds: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000 + seconds, 0).unwrap()
    }

    fn step(
        from: TestState,
        to: TestState,
        sequence: u64,
        seconds: i64,
    ) -> StateTransition<TestState> {
        StateTransition {
            from,
            to,
            event: "Stepped".to_string(),
            sequence,
            timestamp: at(seconds),
        }
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<TestState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last_state().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(step(TestState::Initial, TestState::Processing, 1, 0));

        assert_eq!(history.len(), 0);
        assert_eq!(new_history.len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(step(TestState::Initial, TestState::Processing, 1, 0))
            .record(step(TestState::Processing, TestState::Complete, 2, 5));

        let path = history.get_path();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0], &TestState::Initial);
        assert_eq!(path[1], &TestState::Processing);
        assert_eq!(path[2], &TestState::Complete);
        assert_eq!(history.last_state(), Some(&TestState::Complete));
    }

    #[test]
    fn duration_spans_first_to_last_event() {
        let history = StateHistory::new()
            .record(step(TestState::Initial, TestState::Processing, 1, 0))
            .record(step(TestState::Processing, TestState::Complete, 2, 90));

        assert_eq!(history.duration(), Some(Duration::from_secs(90)));
    }

    #[test]
    fn single_transition_has_duration_zero() {
        let history =
            StateHistory::new().record(step(TestState::Initial, TestState::Processing, 1, 0));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn backwards_clock_has_no_duration() {
        let history = StateHistory::new()
            .record(step(TestState::Initial, TestState::Processing, 1, 10))
            .record(step(TestState::Processing, TestState::Complete, 2, 0));

        assert!(history.duration().is_none());
    }

    #[test]
    fn noop_steps_are_detected() {
        let noop = step(TestState::Processing, TestState::Processing, 1, 0);
        let moved = step(TestState::Initial, TestState::Processing, 2, 0);

        assert!(noop.is_noop());
        assert!(!moved.is_noop());
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new()
            .record(step(TestState::Initial, TestState::Processing, 1, 0));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<TestState> = serde_json::from_str(&json).unwrap();

        assert_eq!(history, deserialized);
    }
}
