//! The book reducer.
//!
//! [`evolve`] maps a state and the next event to the next state. It is a
//! total, pure function: events that do not apply to the current state
//! leave it unchanged, and nothing here fails, panics or logs. Folding a
//! log of events through `evolve`, starting from [`BookState::Initial`],
//! yields the aggregate's current state.

use super::event::{BookEvent, DraftEvent};
use super::state::{BookState, Draft};
use crate::core::Guard;

/// `DraftCreated` only starts a lifecycle; it never rewrites one in progress.
pub const DRAFT_CREATION: Guard<BookState> = Guard::new(BookState::is_initial);

/// Apply one event to a state.
///
/// - `DraftCreated` on `Initial` produces a fresh draft with the genre set.
/// - `ChapterAdded` on `Draft` appends the chapter, keeping the genre.
/// - Every other combination returns `state` unchanged.
///
/// # Example
///
/// ```rust
/// use bookfold::book::{evolve, BookEvent, BookState};
///
/// let state = evolve(BookState::Initial, BookEvent::draft_created("Fantasy"));
/// let draft = state.as_draft().unwrap();
/// assert_eq!(draft.genre.as_deref(), Some("Fantasy"));
/// assert!(draft.chapters.is_empty());
/// ```
pub fn evolve(state: BookState, event: BookEvent) -> BookState {
    match event {
        BookEvent::DraftCreated(created) => {
            if !DRAFT_CREATION.check(&state) {
                return state;
            }
            BookState::Draft(evolve_draft(Draft::initial(), created.into()))
        }
        BookEvent::ChapterAdded(added) => match state {
            BookState::Draft(draft) => BookState::Draft(evolve_draft(draft, added.into())),
            other => other,
        },
        // Later lifecycle stages are not modeled yet.
        BookEvent::UnderEditing(_) => state,
        BookEvent::InPrint(_) => state,
        BookEvent::Published(_) => state,
        BookEvent::OutOfPrint(_) => state,
    }
}

/// Apply a draft-family event to a draft.
///
/// `DraftCreated` replaces the genre (repeated application overwrites it);
/// `ChapterAdded` appends to the end of the chapter list.
pub fn evolve_draft(draft: Draft, event: DraftEvent) -> Draft {
    match event {
        DraftEvent::DraftCreated(created) => draft.with_genre(created.genre),
        DraftEvent::ChapterAdded(added) => draft.with_chapter(added.chapter),
    }
}

/// Fold events, in order, starting from [`BookState::Initial`].
///
/// # Example
///
/// ```rust
/// use bookfold::book::{fold, BookEvent, BookState, Chapter};
///
/// let state = fold([
///     BookEvent::draft_created("Sci-Fi"),
///     BookEvent::chapter_added(Chapter::new(1, "Intro", "...")),
/// ]);
/// assert_eq!(state.as_draft().unwrap().chapters.len(), 1);
/// ```
pub fn fold<I>(events: I) -> BookState
where
    I: IntoIterator<Item = BookEvent>,
{
    fold_from(BookState::Initial, events)
}

/// Fold events, in order, starting from `state`.
pub fn fold_from<I>(state: BookState, events: I) -> BookState
where
    I: IntoIterator<Item = BookEvent>,
{
    events.into_iter().fold(state, evolve)
}
