//! The book aggregate: identity plus the state folded from its events.

use super::event::BookEvent;
use super::evolve::evolve;
use super::state::BookState;
use crate::core::{Event, EventLog, State, StateHistory, StateTransition};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier of one book's event stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookId(Uuid);

impl BookId {
    /// Fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for BookId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A book aggregate.
///
/// `version` counts the events applied so far, including events that were
/// no-ops for the state at the time.
///
/// # Example
///
/// ```rust
/// use bookfold::book::{Book, BookEvent, BookId, Chapter};
/// use bookfold::core::State;
///
/// let book = Book::replay(
///     BookId::new(),
///     [
///         BookEvent::draft_created("Fantasy"),
///         BookEvent::chapter_added(Chapter::new(1, "Intro", "...")),
///     ],
/// );
///
/// assert_eq!(book.state().name(), "Draft");
/// assert_eq!(book.version(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Book {
    id: BookId,
    state: BookState,
    version: u64,
}

impl Book {
    /// A book with no history, in the `Initial` state.
    pub fn new(id: BookId) -> Self {
        Self {
            id,
            state: BookState::Initial,
            version: 0,
        }
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn state(&self) -> &BookState {
        &self.state
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn into_state(self) -> BookState {
        self.state
    }

    /// Apply the next event, returning the evolved book.
    ///
    /// Emits `trace` for every event and `debug` when the event leaves the
    /// state unchanged. The prior state is only kept while debug logging is
    /// enabled.
    pub fn apply(self, event: BookEvent) -> Self {
        let logged = tracing::enabled!(tracing::Level::DEBUG)
            .then(|| (self.state.clone(), event.name().to_string()));
        let state = evolve(self.state, event);
        let version = self.version.saturating_add(1);

        if let Some((from, event_name)) = logged {
            tracing::trace!(
                book_id = %self.id,
                version,
                event = %event_name,
                from = from.name(),
                to = state.name(),
                "event applied"
            );
            if from == state {
                tracing::debug!(
                    book_id = %self.id,
                    version,
                    event = %event_name,
                    state = state.name(),
                    "event had no effect on current state"
                );
            }
        }

        Self {
            id: self.id,
            state,
            version,
        }
    }

    /// Rebuild a book from its events, in order.
    pub fn replay<I>(id: BookId, events: I) -> Self
    where
        I: IntoIterator<Item = BookEvent>,
    {
        let book = events.into_iter().fold(Self::new(id), Self::apply);
        tracing::debug!(
            book_id = %id,
            version = book.version,
            state = book.state.name(),
            "book replayed"
        );
        book
    }

    /// Rebuild a book from a recorded log, keeping one transition per event.
    pub fn replay_log(id: BookId, log: &EventLog<BookEvent>) -> (Self, StateHistory<BookState>) {
        let mut book = Self::new(id);
        let mut history = StateHistory::new();
        let mut noops = 0usize;

        for recorded in log.events() {
            let from = book.state.clone();
            book = book.apply(recorded.event.clone());

            let transition = StateTransition {
                from,
                to: book.state.clone(),
                event: recorded.event.name().to_string(),
                sequence: recorded.sequence,
                timestamp: recorded.recorded_at,
            };
            if transition.is_noop() {
                noops += 1;
            }
            history = history.record(transition);
        }

        tracing::debug!(
            book_id = %id,
            events = log.len(),
            noops,
            state = book.state.name(),
            "book replayed from log"
        );
        (book, history)
    }
}
