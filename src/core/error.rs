//! Event log error types.

use thiserror::Error;

/// Errors raised when rebuilding an event log from recorded events
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LogError {
    /// A recorded event does not carry the next sequence number
    #[error("Event at position {position} has sequence {found}, expected {expected}")]
    OutOfSequence {
        position: usize,
        expected: u64,
        found: u64,
    },
}
