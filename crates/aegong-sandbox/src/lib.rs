//! Sandbox lifecycle: isolated, mutex-registered execution contexts minted
//! and torn down once per audit.

mod error;
mod models;
mod registry;
mod simulate;

pub use error::{Result, SandboxError};
pub use models::{Sandbox, SandboxInfo, CPU_SHARE, MEMORY_LIMIT_BYTES};
pub use registry::SandboxRegistry;
pub use simulate::simulate_execution_log;
