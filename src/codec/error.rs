//! Codec error types.

use thiserror::Error;

/// Errors that can occur while encoding or decoding events and states
#[derive(Debug, Error)]
pub enum CodecError {
    /// Serialization to JSON failed
    #[error("Serialization failed: {0}")]
    Serialization(String),

    /// Deserialization from JSON failed
    #[error("Deserialization failed: {0}")]
    Deserialization(String),
}
