//! Privilege Escalation shield: flags any attempt to acquire elevated
//! system privileges.

use super::contains_any_ci;
use crate::models::ShieldOutcome;
use aegong_sandbox::SandboxInfo;
use serde_json::json;
use std::collections::BTreeMap;

const PATTERNS: &[&str] = &[
    "setuid",
    "setgid",
    "sudo",
    "privilege_escalate",
    "root_access",
    "admin_access",
    "escalate_privileges",
];

const VALID_THRESHOLD: f64 = 0.7;

pub fn validate(bytes: &[u8], _sandbox: &SandboxInfo) -> ShieldOutcome {
    let escalation_detected = contains_any_ci(bytes, PATTERNS);
    let score = if escalation_detected { 0.6 } else { 1.0 };

    let mut details = BTreeMap::new();
    details.insert("escalation_detected".to_string(), json!(escalation_detected));
    details.insert("score".to_string(), json!(score));

    ShieldOutcome::new("privilege_escalation", score >= VALID_THRESHOLD, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegong_sandbox::SandboxRegistry;

    #[test]
    fn clean_artifact_passes() {
        let registry = SandboxRegistry::new();
        let sandbox = registry.create("deadbeefcafebabe", false).unwrap();
        assert!(validate(b"nothing notable here", &sandbox.info).valid);
    }

    #[test]
    fn sudo_invocation_fails() {
        let registry = SandboxRegistry::new();
        let sandbox = registry.create("deadbeefcafebabe", false).unwrap();
        assert!(!validate(b"calls sudo internally", &sandbox.info).valid);
    }
}
