//! Error types for the Immutable Audit Log.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, LogError>;

/// A log append failure never blocks the caller from receiving their
/// `AuditReport`; it is surfaced through this separate error channel
/// instead.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("could not open audit log at {path}: {source}")]
    Open { path: String, source: std::io::Error },

    #[error("failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to append to audit log: {0}")]
    Append(std::io::Error),

    #[error("failed to flush audit log: {0}")]
    Flush(std::io::Error),
}
