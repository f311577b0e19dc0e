//! Shared error types for message models.

use thiserror::Error;

/// Errors raised while decoding or validating chat models.
///
/// Missing data (no quoted message, unresolved poll, empty text) is never an
/// error; these only cover malformed input at the edges.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid language code: {0:?}")]
    InvalidLanguageCode(String),
    #[error("failed to decode message payload: {0}")]
    Decode(#[from] serde_json::Error),
}
