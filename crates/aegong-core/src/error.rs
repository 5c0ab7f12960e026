//! Error types for the Audit Engine.
//!
//! Each component crate's error type is composed in with `#[from]`, plus
//! a couple of variants the engine reserves for itself (bad input,
//! unresolvable reports).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

/// Errors that can abort an audit before a report is produced.
///
/// Only a bad input or a broken sandbox abort the audit outright; a
/// format-parse failure is recovered inside the validator, and a
/// detector or shield failure is isolated per-component inside the
/// engine rather than surfaced here.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The artifact bytes were unreadable or empty.
    #[error("input error: {0}")]
    Input(String),

    /// The sandbox could not be created or torn down.
    #[error("sandbox error: {0}")]
    Sandbox(#[from] aegong_sandbox::SandboxError),

    /// The audit log writer could not be opened.
    #[error("log error: {0}")]
    Log(#[from] aegong_log::LogError),

    /// A persisted report could not be read or written.
    #[error("report storage error: {0}")]
    Storage(String),

    /// The requested report does not exist.
    #[error("no report found for hash prefix '{0}'")]
    ReportNotFound(String),
}

impl From<aegong_validator::ValidatorError> for AuditError {
    fn from(err: aegong_validator::ValidatorError) -> Self {
        AuditError::Input(err.to_string())
    }
}
