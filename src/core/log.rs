//! In-memory ordered event log.

use super::error::LogError;
use super::event::Event;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event stamped with its position in a log and the time it was recorded.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct RecordedEvent<E: Event> {
    /// 1-based position in the log
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
    pub event: E,
}

/// Ordered, append-only sequence of recorded events.
///
/// Appending returns a new log; the receiver is unchanged. Sequence numbers
/// are assigned by the log, start at 1 and count up by one, so the event at
/// index `i` always carries sequence `i + 1`. Logs rebuilt from recorded
/// events, including deserialized ones, are checked against that rule.
///
/// A log serializes as a plain array of recorded events.
///
/// # Example
///
/// ```rust
/// use bookfold::core::EventLog;
/// use bookfold::book::{BookEvent, UnderEditingEvent};
/// use chrono::Utc;
///
/// let log = EventLog::new()
///     .append(BookEvent::draft_created("Fantasy"), Utc::now())
///     .append(BookEvent::UnderEditing(UnderEditingEvent), Utc::now());
///
/// assert_eq!(log.len(), 2);
/// assert_eq!(log.events()[1].sequence, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(
    bound = "",
    try_from = "Vec<RecordedEvent<E>>",
    into = "Vec<RecordedEvent<E>>"
)]
pub struct EventLog<E: Event> {
    events: Vec<RecordedEvent<E>>,
}

impl<E: Event> Default for EventLog<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Event> EventLog<E> {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Append an event, returning a new log.
    pub fn append(&self, event: E, recorded_at: DateTime<Utc>) -> Self {
        let mut events = self.events.clone();
        let sequence = self.next_sequence();
        events.push(RecordedEvent {
            sequence,
            recorded_at,
            event,
        });
        Self { events }
    }

    /// Sequence number the next appended event will receive.
    pub fn next_sequence(&self) -> u64 {
        u64::try_from(self.events.len()).map_or(u64::MAX, |len| len.saturating_add(1))
    }

    pub fn events(&self) -> &[RecordedEvent<E>] {
        &self.events
    }

    /// Iterate over the bare events in log order.
    pub fn iter(&self) -> impl Iterator<Item = &E> {
        self.events.iter().map(|recorded| &recorded.event)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl<E: Event> TryFrom<Vec<RecordedEvent<E>>> for EventLog<E> {
    type Error = LogError;

    /// Rebuild a log, rejecting gaps, duplicates and logs not starting at 1.
    fn try_from(events: Vec<RecordedEvent<E>>) -> Result<Self, Self::Error> {
        for (position, recorded) in events.iter().enumerate() {
            let expected = u64::try_from(position).map_or(u64::MAX, |p| p.saturating_add(1));
            if recorded.sequence != expected {
                return Err(LogError::OutOfSequence {
                    position,
                    expected,
                    found: recorded.sequence,
                });
            }
        }
        Ok(Self { events })
    }
}

impl<E: Event> From<EventLog<E>> for Vec<RecordedEvent<E>> {
    fn from(log: EventLog<E>) -> Self {
        log.events
    }
}
