//! Error types for the Agent Validator.

use thiserror::Error;

/// Result type alias for validator operations.
pub type Result<T> = std::result::Result<T, ValidatorError>;

/// Errors surfaced by the Agent Validator.
///
/// A format-parser failure is recovered locally: the validator records a
/// reason and returns an `is_agent=false` result. Only an unreadable
/// artifact raises [`ValidatorError::Io`].
#[derive(Debug, Error)]
pub enum ValidatorError {
    /// The artifact bytes could not be read from their source.
    #[error("could not read artifact: {0}")]
    Io(String),

    /// The artifact was empty.
    #[error("artifact is empty")]
    Empty,
}
