//! Sandbox data model: an isolated, mutex-registered execution context
//! minted for the duration of one audit.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::path::PathBuf;

pub const MEMORY_LIMIT_BYTES: u64 = 512 * 1024 * 1024;
pub const CPU_SHARE: f64 = 0.5;

/// Serializable snapshot of a sandbox's policy fields, for shield details
/// and report embedding. Excludes the live log handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SandboxInfo {
    pub id: String,
    pub memory_limit_bytes: u64,
    pub cpu_share: f64,
    pub network_ns: String,
    pub filesystem_root: PathBuf,
    pub isolation_full: bool,
    pub process_id: Option<u32>,
}

/// A live sandbox.
///
/// Filesystem and log-handle teardown runs in `Drop`, so destruction
/// happens on every exit path from an audit (including a panic unwinding
/// through the engine), without threading a cleanup guard through the
/// pipeline by hand.
#[derive(Debug)]
pub struct Sandbox {
    pub info: SandboxInfo,
    log_handle: Option<File>,
    destroyed: bool,
}

impl Sandbox {
    pub(crate) fn new(info: SandboxInfo, log_handle: Option<File>) -> Self {
        Self {
            info,
            log_handle,
            destroyed: false,
        }
    }

    pub fn id(&self) -> &str {
        &self.info.id
    }

    /// Explicit, idempotent teardown. Safe to call more than once, and safe
    /// to skip entirely and rely on `Drop`.
    pub fn destroy(&mut self) {
        if self.destroyed {
            return;
        }
        self.log_handle.take();
        let _ = std::fs::remove_dir_all(&self.info.filesystem_root);
        self.destroyed = true;
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        self.destroy();
    }
}
