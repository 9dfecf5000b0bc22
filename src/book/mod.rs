//! The book lifecycle aggregate.
//!
//! A book moves through `Initial`, `Draft`, `UnderEditing`, `PublishedBook`,
//! `InPrint` and `OutOfPrint`. Its current state is never stored; it is
//! derived by folding the book's events through [`evolve`].
//!
//! Only the draft stage is modeled in detail. Events for the later stages
//! exist so callers can record them, but applying them changes nothing yet.
//!
//! # Example
//!
//! ```rust
//! use bookfold::book::{fold, BookEvent, Chapter, UnderEditingEvent};
//! use bookfold::core::State;
//!
//! let state = fold([
//!     BookEvent::draft_created("Sci-Fi"),
//!     BookEvent::chapter_added(Chapter::new(1, "Intro", "...")),
//!     BookEvent::chapter_added(Chapter::new(2, "Rise", "...")),
//!     UnderEditingEvent.into(),
//! ]);
//!
//! assert_eq!(state.name(), "Draft");
//! let draft = state.as_draft().unwrap();
//! assert_eq!(draft.genre.as_deref(), Some("Sci-Fi"));
//! assert_eq!(draft.chapters.len(), 2);
//! ```

mod aggregate;
mod chapter;
mod event;
mod evolve;
mod state;

pub use aggregate::{Book, BookId};
pub use chapter::Chapter;
pub use event::{
    BookEvent, ChapterAdded, DraftCreated, DraftEvent, DraftFamily, InPrintEvent,
    OutOfPrintEvent, PublishedEvent, UnderEditingEvent,
};
pub use evolve::{evolve, evolve_draft, fold, fold_from, DRAFT_CREATION};
pub use state::{BookState, Draft};
