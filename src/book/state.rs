//! Lifecycle states of a book.

use super::chapter::Chapter;
use crate::core::State;
use serde::{Deserialize, Serialize};

/// Payload of a book that is still being written.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    /// Unset until a `DraftCreated` event is applied
    pub genre: Option<String>,
    /// Narrative order; only ever appended to
    pub chapters: Vec<Chapter>,
}

impl Draft {
    /// Empty draft: no genre, no chapters.
    ///
    /// Every draft lifecycle starts from this value.
    pub fn initial() -> Self {
        Self::default()
    }

    /// Returns the draft with `genre` replaced.
    pub fn with_genre(self, genre: String) -> Self {
        Self {
            genre: Some(genre),
            ..self
        }
    }

    /// Returns the draft with `chapter` appended after the existing chapters.
    pub fn with_chapter(self, chapter: Chapter) -> Self {
        let mut chapters = self.chapters;
        chapters.push(chapter);
        Self { chapters, ..self }
    }
}

/// Where a book is in its lifecycle.
///
/// Exactly one variant is active at a time. Only `Draft` carries data; the
/// later stages have no payload yet.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum BookState {
    /// Nothing has happened yet
    #[default]
    Initial,
    Draft(Draft),
    UnderEditing,
    PublishedBook,
    InPrint,
    OutOfPrint,
}

impl BookState {
    /// A `Draft` state holding an empty draft.
    pub fn initial_draft() -> Self {
        Self::Draft(Draft::initial())
    }

    pub fn is_initial(&self) -> bool {
        matches!(self, Self::Initial)
    }

    pub fn is_draft(&self) -> bool {
        matches!(self, Self::Draft(_))
    }

    pub fn as_draft(&self) -> Option<&Draft> {
        match self {
            Self::Draft(draft) => Some(draft),
            _ => None,
        }
    }
}

impl State for BookState {
    fn name(&self) -> &str {
        match self {
            Self::Initial => "Initial",
            Self::Draft(_) => "Draft",
            Self::UnderEditing => "UnderEditing",
            Self::PublishedBook => "PublishedBook",
            Self::InPrint => "InPrint",
            Self::OutOfPrint => "OutOfPrint",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::OutOfPrint)
    }
}
