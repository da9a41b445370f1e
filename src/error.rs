//! Error types for rendering and payload decoding.
//!
//! Pattern translation itself never fails; these cover the work done around it.

use thiserror::Error;

/// Errors that can occur when rendering a date value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("timestamp out of range: {millis} ms")]
    TimestampOutOfRange { millis: i64 },

    #[error("timestamp is not a finite number")]
    NonFiniteTimestamp,
}

/// Errors that can occur when decoding a result payload.
#[derive(Debug, Error)]
pub enum PayloadError {
    #[error("malformed result payload: {0}")]
    Json(#[from] serde_json::Error),
}
