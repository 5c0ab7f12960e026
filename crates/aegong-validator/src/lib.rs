//! Agent Validator: classifies an artifact's format and decides whether its
//! extracted capability set satisfies the agent predicate.

mod capability;
mod confidence;
mod error;
mod format;
mod models;
mod parsers;
mod validator;

pub use confidence::ConfidenceSource;
pub use error::{Result, ValidatorError};
pub use format::detect_format;
pub use models::{ArtifactFormat, Capability, ValidationResult};
pub use validator::AgentValidator;
