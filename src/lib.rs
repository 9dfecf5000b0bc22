//! Bookfold: an event-sourced book lifecycle aggregate
//!
//! A book's state is never stored. It is derived by folding the book's
//! ordered events through a pure reducer, one event at a time, starting from
//! the `Initial` state. Replaying the same events always yields the same
//! state.
//!
//! # Core Concepts
//!
//! - **State**: type-safe lifecycle stages via the `State` trait
//! - **Events**: immutable facts tagged with `Event` / `ExternalEvent`
//! - **Evolve**: the total reducer `(BookState, BookEvent) -> BookState`;
//!   events that do not apply to the current state are no-ops
//! - **History**: the transitions a replay passed through
//!
//! # Example
//!
//! ```rust
//! use bookfold::book::{fold, BookEvent, BookState, Chapter, Draft};
//!
//! let state = fold([
//!     BookEvent::draft_created("Sci-Fi"),
//!     BookEvent::chapter_added(Chapter::new(1, "Intro", "...")),
//!     BookEvent::chapter_added(Chapter::new(2, "Rise", "...")),
//! ]);
//!
//! assert_eq!(
//!     state,
//!     BookState::Draft(Draft {
//!         genre: Some("Sci-Fi".to_string()),
//!         chapters: vec![
//!             Chapter::new(1, "Intro", "..."),
//!             Chapter::new(2, "Rise", "..."),
//!         ],
//!     })
//! );
//! ```

pub mod book;
pub mod codec;
pub mod core;

// Re-export commonly used types
pub use crate::book::{evolve, fold, Book, BookEvent, BookId, BookState, Chapter, Draft};
pub use crate::codec::CodecError;
pub use crate::core::{
    Event, EventLog, ExternalEvent, Guard, LogError, State, StateHistory, StateTransition,
};
