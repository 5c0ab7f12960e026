//! Integrity shield: hashes the artifact, and flags self-modification
//! behavior, packer wrapping, and the absence of a code-signing claim.

use super::contains_any_ci;
use crate::models::ShieldOutcome;
use aegong_sandbox::SandboxInfo;
use serde_json::json;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

const SELF_MODIFY_PATTERNS: &[&str] = &[
    "self_modify",
    "runtime_patch",
    "code_injection",
    "dynamic_loading",
    "runtime_generation",
];

const PACKER_PATTERNS: &[&str] = &["upx", "aspack", "pepack", "executable packer", "packed", "compressed executable"];

const SIGNING_PATTERNS: &[&str] = &["certificate", "signature", "pkcs", "x509", "digital signature", "code signing"];

const VALID_THRESHOLD: f64 = 0.6;

fn to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

pub fn validate(bytes: &[u8], _sandbox: &SandboxInfo) -> ShieldOutcome {
    let digest = to_hex(&Sha256::digest(bytes));
    let self_modifying = contains_any_ci(bytes, SELF_MODIFY_PATTERNS);
    let packed = contains_any_ci(bytes, PACKER_PATTERNS);
    let signed = contains_any_ci(bytes, SIGNING_PATTERNS);

    let mut score = 1.0;
    if self_modifying {
        score -= 0.4;
    }
    if packed {
        score -= 0.3;
    }
    if !signed {
        score -= 0.3;
    }
    let score = score.max(0.0);

    let mut details = BTreeMap::new();
    details.insert("sha256".to_string(), json!(digest));
    details.insert("self_modifying".to_string(), json!(self_modifying));
    details.insert("packed".to_string(), json!(packed));
    details.insert("signed".to_string(), json!(signed));
    details.insert("score".to_string(), json!(score));

    ShieldOutcome::new("integrity", score >= VALID_THRESHOLD, details)
}
