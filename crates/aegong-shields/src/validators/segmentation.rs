//! Segmentation shield: confirms the sandbox's declared isolation
//! boundaries actually hold and that no content in the artifact claims to
//! have crossed them.

use super::contains_any_ci;
use crate::models::ShieldOutcome;
use aegong_sandbox::SandboxInfo;
use serde_json::json;
use std::collections::BTreeMap;

const BOUNDARY_PATTERNS: &[&str] = &["boundary_cross", "isolation_break"];

const NETWORK_WEIGHT: f64 = 0.3;
const FILESYSTEM_WEIGHT: f64 = 0.3;
const RESOURCE_WEIGHT: f64 = 0.2;
const NO_BOUNDARY_CROSSING_WEIGHT: f64 = 0.2;
const VALID_THRESHOLD: f64 = 0.7;

pub fn validate(bytes: &[u8], sandbox: &SandboxInfo) -> ShieldOutcome {
    let network_isolated = sandbox.network_ns == "none";
    let filesystem_isolated = sandbox.filesystem_root.starts_with(std::env::temp_dir());
    let resource_limited = sandbox.memory_limit_bytes > 0 && sandbox.cpu_share > 0.0;
    let boundary_crossing_detected = contains_any_ci(bytes, BOUNDARY_PATTERNS);

    let mut score = 0.0;
    if network_isolated {
        score += NETWORK_WEIGHT;
    }
    if filesystem_isolated {
        score += FILESYSTEM_WEIGHT;
    }
    if resource_limited {
        score += RESOURCE_WEIGHT;
    }
    if !boundary_crossing_detected {
        score += NO_BOUNDARY_CROSSING_WEIGHT;
    }

    let mut details = BTreeMap::new();
    details.insert("network_isolated".to_string(), json!(network_isolated));
    details.insert("filesystem_isolated".to_string(), json!(filesystem_isolated));
    details.insert("resource_limited".to_string(), json!(resource_limited));
    details.insert("boundary_crossing_detected".to_string(), json!(boundary_crossing_detected));
    details.insert("score".to_string(), json!(score));

    ShieldOutcome::new("segmentation", score >= VALID_THRESHOLD, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegong_sandbox::SandboxRegistry;

    #[test]
    fn clean_sandbox_with_no_boundary_claims_is_valid() {
        let registry = SandboxRegistry::new();
        let sandbox = registry.create("deadbeefcafebabe", false).unwrap();
        let outcome = validate(b"ordinary artifact bytes", &sandbox.info);
        assert!(outcome.valid);
    }

    #[test]
    fn boundary_crossing_claim_drops_score_below_threshold() {
        let registry = SandboxRegistry::new();
        let sandbox = registry.create("deadbeefcafebabe", false).unwrap();
        let outcome = validate(b"attempting boundary_cross now", &sandbox.info);
        assert!(!outcome.valid);
    }
}
