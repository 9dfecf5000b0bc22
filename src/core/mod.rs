//! Core aggregate types and logic.
//!
//! This module contains the domain-independent, pure functional core:
//! - State definitions via the `State` trait
//! - Event capabilities via the `Event` and `ExternalEvent` traits
//! - Guard predicates for transition eligibility
//! - Immutable event logs and transition histories
//!
//! Nothing in this module performs I/O.

mod error;
mod event;
mod guard;
mod history;
mod log;
mod state;

pub use error::LogError;
pub use event::{Event, ExternalEvent};
pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use log::{EventLog, RecordedEvent};
pub use state::State;
