//! Event capabilities.
//!
//! Events are immutable facts. The traits here only tag what an event *is*;
//! they carry no behavior beyond a display tag, so a domain can group its
//! events into independently expressible sets without duplicating payloads.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Capability held by every domain event.
///
/// # Example
///
/// ```rust
/// use bookfold::core::Event;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// struct Opened;
///
/// impl Event for Opened {
///     fn name(&self) -> &str {
///         "Opened"
///     }
/// }
///
/// assert_eq!(Opened.name(), "Opened");
/// ```
pub trait Event:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Event tag for display and logging. Never used for dispatch.
    fn name(&self) -> &str;
}

/// Marker for events that may originate outside the aggregate.
///
/// Events without this marker are derived internally. The distinction is
/// purely type-level: an API that accepts input from callers can require
/// `E: ExternalEvent` and reject internal events at compile time.
pub trait ExternalEvent: Event {}
