//! Domain events of a book.
//!
//! Every event type implements [`Event`]. The draft family
//! ([`DraftCreated`], [`ChapterAdded`]) additionally implements
//! [`DraftFamily`] so it can be handed to the draft reducer. Events a caller
//! may submit from outside the aggregate implement [`ExternalEvent`];
//! [`InPrintEvent`] is internal only.

use super::chapter::Chapter;
use crate::core::{Event, ExternalEvent};
use serde::{Deserialize, Serialize};

/// A draft was started with the given genre.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftCreated {
    pub genre: String,
}

/// A chapter was written for the draft.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChapterAdded {
    pub chapter: Chapter,
}

/// The book moved to editing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnderEditingEvent;

/// The book went to print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InPrintEvent;

/// The book was published.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishedEvent;

/// The book went out of print.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutOfPrintEvent;

/// Events that carry data for evolving a [`Draft`](super::Draft).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum DraftEvent {
    DraftCreated(DraftCreated),
    ChapterAdded(ChapterAdded),
}

/// Marker for the draft-family payload types.
pub trait DraftFamily: ExternalEvent + Into<DraftEvent> {}

/// Every event a book can experience.
///
/// Serialized adjacently tagged, e.g.
/// `{"type": "DraftCreated", "data": {"genre": "Fantasy"}}`. The `type` tag is
/// always the event's [`Event::name`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BookEvent {
    DraftCreated(DraftCreated),
    ChapterAdded(ChapterAdded),
    #[serde(rename = "UnderEditingEvent")]
    UnderEditing(UnderEditingEvent),
    #[serde(rename = "InPrintEvent")]
    InPrint(InPrintEvent),
    #[serde(rename = "PublishedEvent")]
    Published(PublishedEvent),
    #[serde(rename = "OutOfPrintEvent")]
    OutOfPrint(OutOfPrintEvent),
}

impl BookEvent {
    pub fn draft_created(genre: impl Into<String>) -> Self {
        Self::DraftCreated(DraftCreated {
            genre: genre.into(),
        })
    }

    pub fn chapter_added(chapter: Chapter) -> Self {
        Self::ChapterAdded(ChapterAdded { chapter })
    }

    /// Wrap an event submitted from outside the aggregate.
    ///
    /// Only [`ExternalEvent`] types are accepted, so internal events such as
    /// [`InPrintEvent`] cannot enter through this constructor.
    pub fn external<E>(event: E) -> Self
    where
        E: ExternalEvent + Into<Self>,
    {
        event.into()
    }

    /// Whether this event's type carries the [`ExternalEvent`] capability.
    pub fn is_external(&self) -> bool {
        match self {
            Self::DraftCreated(_)
            | Self::ChapterAdded(_)
            | Self::UnderEditing(_)
            | Self::Published(_)
            | Self::OutOfPrint(_) => true,
            Self::InPrint(_) => false,
        }
    }

    /// Whether this event belongs to the draft family.
    pub fn is_draft_event(&self) -> bool {
        matches!(self, Self::DraftCreated(_) | Self::ChapterAdded(_))
    }
}

impl Event for DraftCreated {
    fn name(&self) -> &str {
        "DraftCreated"
    }
}

impl Event for ChapterAdded {
    fn name(&self) -> &str {
        "ChapterAdded"
    }
}

impl Event for UnderEditingEvent {
    fn name(&self) -> &str {
        "UnderEditingEvent"
    }
}

impl Event for InPrintEvent {
    fn name(&self) -> &str {
        "InPrintEvent"
    }
}

impl Event for PublishedEvent {
    fn name(&self) -> &str {
        "PublishedEvent"
    }
}

impl Event for OutOfPrintEvent {
    fn name(&self) -> &str {
        "OutOfPrintEvent"
    }
}

impl Event for DraftEvent {
    fn name(&self) -> &str {
        match self {
            Self::DraftCreated(event) => event.name(),
            Self::ChapterAdded(event) => event.name(),
        }
    }
}

impl Event for BookEvent {
    fn name(&self) -> &str {
        match self {
            Self::DraftCreated(event) => event.name(),
            Self::ChapterAdded(event) => event.name(),
            Self::UnderEditing(event) => event.name(),
            Self::InPrint(event) => event.name(),
            Self::Published(event) => event.name(),
            Self::OutOfPrint(event) => event.name(),
        }
    }
}

impl ExternalEvent for DraftCreated {}
impl ExternalEvent for ChapterAdded {}
impl ExternalEvent for DraftEvent {}
impl ExternalEvent for UnderEditingEvent {}
impl ExternalEvent for PublishedEvent {}
impl ExternalEvent for OutOfPrintEvent {}

impl DraftFamily for DraftCreated {}
impl DraftFamily for ChapterAdded {}

impl From<DraftCreated> for DraftEvent {
    fn from(event: DraftCreated) -> Self {
        Self::DraftCreated(event)
    }
}

impl From<ChapterAdded> for DraftEvent {
    fn from(event: ChapterAdded) -> Self {
        Self::ChapterAdded(event)
    }
}

impl From<DraftEvent> for BookEvent {
    fn from(event: DraftEvent) -> Self {
        match event {
            DraftEvent::DraftCreated(event) => Self::DraftCreated(event),
            DraftEvent::ChapterAdded(event) => Self::ChapterAdded(event),
        }
    }
}

impl From<DraftCreated> for BookEvent {
    fn from(event: DraftCreated) -> Self {
        Self::DraftCreated(event)
    }
}

impl From<ChapterAdded> for BookEvent {
    fn from(event: ChapterAdded) -> Self {
        Self::ChapterAdded(event)
    }
}

impl From<UnderEditingEvent> for BookEvent {
    fn from(event: UnderEditingEvent) -> Self {
        Self::UnderEditing(event)
    }
}

impl From<InPrintEvent> for BookEvent {
    fn from(event: InPrintEvent) -> Self {
        Self::InPrint(event)
    }
}

impl From<PublishedEvent> for BookEvent {
    fn from(event: PublishedEvent) -> Self {
        Self::Published(event)
    }
}

impl From<OutOfPrintEvent> for BookEvent {
    fn from(event: OutOfPrintEvent) -> Self {
        Self::OutOfPrint(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_events() -> Vec<BookEvent> {
        vec![
            BookEvent::draft_created("Fantasy"),
            BookEvent::chapter_added(Chapter::new(1, "Intro", "...")),
            UnderEditingEvent.into(),
            InPrintEvent.into(),
            PublishedEvent.into(),
            OutOfPrintEvent.into(),
        ]
    }

    fn draft_family_name<E: DraftFamily>(event: E) -> String {
        let draft_event: DraftEvent = event.into();
        draft_event.name().to_string()
    }

    #[test]
    fn names_are_stable_labels() {
        let names: Vec<String> = all_events().iter().map(|e| e.name().to_string()).collect();
        assert_eq!(
            names,
            vec![
                "DraftCreated",
                "ChapterAdded",
                "UnderEditingEvent",
                "InPrintEvent",
                "PublishedEvent",
                "OutOfPrintEvent"
            ]
        );
    }

    #[test]
    fn only_in_print_is_internal() {
        for event in all_events() {
            assert_eq!(event.is_external(), event.name() != "InPrintEvent");
        }
    }

    #[test]
    fn external_constructor_accepts_external_events() {
        assert_eq!(
            BookEvent::external(PublishedEvent),
            BookEvent::Published(PublishedEvent)
        );
        assert_eq!(
            BookEvent::external(DraftCreated {
                genre: "Poetry".to_string()
            }),
            BookEvent::draft_created("Poetry")
        );
    }

    #[test]
    fn draft_family_converts_to_draft_event() {
        assert_eq!(
            draft_family_name(DraftCreated {
                genre: "Poetry".to_string()
            }),
            "DraftCreated"
        );
        assert_eq!(
            draft_family_name(ChapterAdded {
                chapter: Chapter::new(1, "One", "")
            }),
            "ChapterAdded"
        );
    }

    #[test]
    fn draft_events_are_classified() {
        let classified: Vec<bool> = all_events().iter().map(BookEvent::is_draft_event).collect();
        assert_eq!(classified, vec![true, true, false, false, false, false]);
    }

    #[test]
    fn draft_event_round_trips_through_book_event() {
        let draft_event = DraftEvent::from(DraftCreated {
            genre: "Sci-Fi".to_string(),
        });
        let book_event = BookEvent::from(draft_event.clone());
        assert_eq!(book_event, BookEvent::draft_created("Sci-Fi"));
        assert_eq!(book_event.name(), draft_event.name());
    }

    #[test]
    fn event_serializes_adjacently_tagged() {
        let json = serde_json::to_value(BookEvent::draft_created("Fantasy")).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "type": "DraftCreated", "data": { "genre": "Fantasy" } })
        );
    }

    #[test]
    fn serialized_type_tag_matches_name() {
        for event in all_events() {
            let json = serde_json::to_value(&event).unwrap();
            assert_eq!(json["type"], event.name());
        }
    }

    #[test]
    fn lifecycle_event_decodes_by_name() {
        let event: BookEvent =
            serde_json::from_value(serde_json::json!({ "type": "PublishedEvent", "data": null }))
                .unwrap();
        assert_eq!(event, BookEvent::Published(PublishedEvent));

        let variant_tag = serde_json::json!({ "type": "Published", "data": null });
        assert!(serde_json::from_value::<BookEvent>(variant_tag).is_err());
    }

    #[test]
    fn every_event_survives_json() {
        for event in all_events() {
            let json = serde_json::to_string(&event).unwrap();
            let back: BookEvent = serde_json::from_str(&json).unwrap();
            assert_eq!(back, event);
        }
    }
}
