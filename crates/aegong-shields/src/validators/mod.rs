//! Shield registry and the substring-counting helper shared by every
//! module.

mod audit_trail;
mod consensus;
mod heuristic;
mod integrity;
mod privilege;
mod segmentation;

use crate::models::ShieldOutcome;
use aegong_sandbox::SandboxInfo;
use std::collections::BTreeMap;
use std::panic::{self, AssertUnwindSafe};

/// A shield is a stateless `(bytes, sandbox) -> ShieldOutcome` function. Six
/// orthogonal modules, run independently; order only affects the
/// `shield_results` map's insertion order, not any shield's own verdict.
pub fn registry() -> Vec<(&'static str, fn(&[u8], &SandboxInfo) -> ShieldOutcome)> {
    vec![
        ("segmentation", segmentation::validate),
        ("heuristic", heuristic::validate),
        ("integrity", integrity::validate),
        ("privilege_escalation", privilege::validate),
        ("audit_trail", audit_trail::validate),
        ("multi_party_consensus", consensus::validate),
    ]
}

/// Runs every registered shield over `bytes` and `sandbox`, in registration
/// order. A shield that panics is isolated: the panic is caught and
/// surfaced as an invalid outcome carrying the failure in its details
/// rather than aborting the rest of the pipeline.
pub fn validate_all(bytes: &[u8], sandbox: &SandboxInfo) -> Vec<ShieldOutcome> {
    registry()
        .into_iter()
        .map(|(name, validate)| match panic::catch_unwind(AssertUnwindSafe(|| validate(bytes, sandbox))) {
            Ok(outcome) => outcome,
            Err(_) => {
                tracing::error!(shield = name, "shield panicked; recording failure");
                let mut details = BTreeMap::new();
                details.insert("error".to_string(), serde_json::json!("shield panicked during validation"));
                ShieldOutcome::new(name, false, details)
            }
        })
        .collect()
}

/// Counts case-insensitive substring hits of each pattern in `patterns`
/// against `bytes` (interpreted as lossy UTF-8 text), one hit per pattern
/// that appears at least once.
pub(crate) fn count_distinct_hits(bytes: &[u8], patterns: &[&str]) -> usize {
    let text = String::from_utf8_lossy(bytes).to_ascii_lowercase();
    patterns.iter().filter(|p| text.contains(&p.to_ascii_lowercase())).count()
}

/// Counts total occurrences, with multiplicity, of any pattern in
/// `patterns` against `bytes`.
pub(crate) fn count_total_occurrences(bytes: &[u8], patterns: &[&str]) -> usize {
    let text = String::from_utf8_lossy(bytes).to_ascii_lowercase();
    patterns
        .iter()
        .map(|p| text.matches(&p.to_ascii_lowercase()).count())
        .sum()
}

pub(crate) fn contains_any_ci(bytes: &[u8], patterns: &[&str]) -> bool {
    let text = String::from_utf8_lossy(bytes).to_ascii_lowercase();
    patterns.iter().any(|p| text.contains(&p.to_ascii_lowercase()))
}
