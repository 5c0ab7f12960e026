use thiserror::Error;

pub type Result<T> = std::result::Result<T, SandboxError>;

#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("sandbox io error: {0}")]
    Io(String),

    #[error("sandbox id {0} already registered")]
    DuplicateId(String),

    #[error("sandbox id {0} not found")]
    NotFound(String),

    #[error("system clock error: {0}")]
    Clock(String),
}
