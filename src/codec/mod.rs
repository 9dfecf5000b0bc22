//! JSON encoding for values crossing the caller boundary.
//!
//! Events use adjacently tagged JSON, e.g.
//! `{"type": "ChapterAdded", "data": {"chapter": {...}}}`. This module only
//! converts between values and text; it does not store anything.

use crate::book::BookEvent;
use crate::core::EventLog;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub mod error;

pub use error::CodecError;

/// Encode any serializable value as compact JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string(value).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Encode any serializable value as indented JSON.
pub fn to_json_pretty<T: Serialize>(value: &T) -> Result<String, CodecError> {
    serde_json::to_string_pretty(value).map_err(|e| CodecError::Serialization(e.to_string()))
}

/// Decode a value from JSON.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, CodecError> {
    serde_json::from_str(json).map_err(|e| CodecError::Deserialization(e.to_string()))
}

/// Encode a book's event log.
pub fn encode_log(log: &EventLog<BookEvent>) -> Result<String, CodecError> {
    to_json(log)
}

/// Decode a book's event log.
///
/// Unknown event types are rejected rather than skipped, as are logs whose
/// sequence numbers are not exactly `1..=len` in order.
pub fn decode_log(json: &str) -> Result<EventLog<BookEvent>, CodecError> {
    let log: EventLog<BookEvent> = from_json(json)?;
    tracing::debug!(events = log.len(), "decoded event log");
    Ok(log)
}
