//! Multi-Party Consensus shield: three independent validators apply
//! disjoint rejection rules; consensus holds if a majority pass.

use super::contains_any_ci;
use crate::models::ShieldOutcome;
use aegong_sandbox::SandboxInfo;
use serde_json::json;
use std::collections::BTreeMap;

const V1_REJECT: &[&str] = &["malicious", "exploit"];
const V2_REJECT: &[&str] = &["violation", "bypass"];
const V3_REJECT: &[&str] = &["tamper", "corrupt"];

const QUORUM: usize = 2;

pub fn validate(bytes: &[u8], _sandbox: &SandboxInfo) -> ShieldOutcome {
    let v1_pass = !contains_any_ci(bytes, V1_REJECT);
    let v2_pass = !contains_any_ci(bytes, V2_REJECT);
    let v3_pass = !contains_any_ci(bytes, V3_REJECT);
    let passing = [v1_pass, v2_pass, v3_pass].iter().filter(|p| **p).count();

    let mut details = BTreeMap::new();
    details.insert("party_1_pass".to_string(), json!(v1_pass));
    details.insert("party_2_pass".to_string(), json!(v2_pass));
    details.insert("party_3_pass".to_string(), json!(v3_pass));
    details.insert("passing_count".to_string(), json!(passing));

    ShieldOutcome::new("multi_party_consensus", passing >= QUORUM, details)
}
