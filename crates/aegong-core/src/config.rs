//! Configuration for the Audit Engine, split into one `*Config` struct per
//! subsystem, each with a sensible `Default`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEngineConfig {
    pub storage: StorageConfig,
    pub global: GlobalConfig,
}

impl Default for AuditEngineConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            global: GlobalConfig::default(),
        }
    }
}

impl AuditEngineConfig {
    /// Builds the default configuration, then layers in environment
    /// overrides: `AEGONG_DEV_MODE=1` disables full resource-limit
    /// enforcement in the sandbox.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if std::env::var("AEGONG_DEV_MODE").as_deref() == Ok("1") {
            config.global.dev_mode = true;
        }
        config
    }
}

/// Where persisted reports and the audit log live on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub reports_dir: PathBuf,
    pub log_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            reports_dir: PathBuf::from("reports"),
            log_path: PathBuf::from("aegong_audit.log"),
        }
    }
}

/// Global engine toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Mirrors `AEGONG_DEV_MODE`: the sandbox still reports accurate
    /// segmentation-shield flags, but does not require cgroup access.
    pub dev_mode: bool,

    /// Skips sandbox filesystem creation/destruction. Reserved for
    /// explicit test harnesses; never set true by `from_env`.
    pub test_mode: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            dev_mode: false,
            test_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_not_dev_or_test_mode() {
        let config = AuditEngineConfig::default();
        assert!(!config.global.dev_mode);
        assert!(!config.global.test_mode);
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = AuditEngineConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: AuditEngineConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.storage.log_path, config.storage.log_path);
    }
}
