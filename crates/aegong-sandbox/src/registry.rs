//! Mutex-guarded sandbox registry.
//!
//! Enforces id uniqueness at creation time and backs the explicit
//! destroy-by-id path: register under the mutex on create, remove from
//! the map on destroy.

use crate::error::{Result, SandboxError};
use crate::models::{Sandbox, SandboxInfo, CPU_SHARE, MEMORY_LIMIT_BYTES};
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::sync::Mutex;
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Debug, Default)]
pub struct SandboxRegistry {
    active_ids: Mutex<HashSet<String>>,
}

impl SandboxRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints `aegong-<hash-prefix>-<epoch_seconds>`, creates its scratch
    /// directory and append-only log under the OS temp root, and registers
    /// the id. `dev_mode` mirrors `AEGONG_DEV_MODE`: when set, resource-limit
    /// enforcement is reported as unavailable regardless of cgroup support,
    /// while filesystem and log isolation are still provided.
    pub fn create(&self, agent_hash: &str, dev_mode: bool) -> Result<Sandbox> {
        self.create_inner(agent_hash, true, dev_mode)
    }

    /// Mints a sandbox id and registers it exactly as [`Self::create`]
    /// does, but skips all filesystem and log-file I/O. Reserved for
    /// explicit test harnesses; the engine never takes this path in
    /// normal operation.
    pub fn create_test_mode(&self, agent_hash: &str) -> Result<Sandbox> {
        self.create_inner(agent_hash, false, false)
    }

    fn create_inner(&self, agent_hash: &str, touch_filesystem: bool, dev_mode: bool) -> Result<Sandbox> {
        let epoch = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_err(|e| SandboxError::Clock(e.to_string()))?
            .as_secs();
        let prefix_len = agent_hash.len().min(8);
        let id = format!("aegong-{}-{}", &agent_hash[..prefix_len], epoch);

        {
            let mut ids = self.active_ids.lock().expect("sandbox registry mutex poisoned");
            if !ids.insert(id.clone()) {
                return Err(SandboxError::DuplicateId(id));
            }
        }

        let root = std::env::temp_dir().join(&id);
        let mut log_handle = None;
        if touch_filesystem {
            if let Err(e) = std::fs::create_dir_all(&root) {
                self.active_ids.lock().expect("sandbox registry mutex poisoned").remove(&id);
                return Err(SandboxError::Io(e.to_string()));
            }
            #[cfg(unix)]
            {
                use std::os::unix::fs::PermissionsExt;
                let _ = std::fs::set_permissions(&root, std::fs::Permissions::from_mode(0o755));
            }

            let log_path = root.join("sandbox.log");
            log_handle = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&log_path)
                    .map_err(|e| SandboxError::Io(e.to_string()))?,
            );
        }

        let info = SandboxInfo {
            id: id.clone(),
            memory_limit_bytes: MEMORY_LIMIT_BYTES,
            cpu_share: CPU_SHARE,
            network_ns: "none".to_string(),
            filesystem_root: root,
            isolation_full: touch_filesystem && !dev_mode && cgroup_support_available(),
            process_id: None,
        };
        Ok(Sandbox::new(info, log_handle))
    }

    /// Destroys a sandbox by consuming its own id for the registry lookup.
    /// Returns `NotFound` if the id isn't currently registered (already
    /// destroyed, or unknown to this registry); idempotent against a call
    /// racing the sandbox's own `Drop`.
    pub fn destroy(&self, sandbox: &mut Sandbox) -> Result<()> {
        let removed = self
            .active_ids
            .lock()
            .expect("sandbox registry mutex poisoned")
            .remove(sandbox.id());
        if !removed {
            return Err(SandboxError::NotFound(sandbox.id().to_string()));
        }
        sandbox.destroy();
        Ok(())
    }
}

#[cfg(target_os = "linux")]
fn cgroup_support_available() -> bool {
    std::path::Path::new("/sys/fs/cgroup").exists()
}

#[cfg(not(target_os = "linux"))]
fn cgroup_support_available() -> bool {
    false
}
