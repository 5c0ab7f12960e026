//! Audit Trail shield: checks for logging/observability vocabulary in the
//! artifact.
//!
//! The scoring table below is a known-weak heuristic, preserved exactly as
//! specified: its maximum attainable score (0.4) never reaches the 0.6
//! validity threshold, so this shield fails on every artifact regardless of
//! how much logging vocabulary it contains. Treat this as intentional,
//! versioned scoring policy rather than a bug to silently correct.

use super::count_total_occurrences;
use crate::models::ShieldOutcome;
use aegong_sandbox::SandboxInfo;
use serde_json::json;
use std::collections::BTreeMap;

const PATTERNS: &[&str] = &["log", "audit", "trace", "record", "journal"];
const HIT_THRESHOLD: usize = 5;
const SCORE_IF_ABOVE_THRESHOLD: f64 = 0.4;
const VALID_THRESHOLD: f64 = 0.6;

pub fn validate(bytes: &[u8], _sandbox: &SandboxInfo) -> ShieldOutcome {
    let occurrences = count_total_occurrences(bytes, PATTERNS);
    let score = if occurrences > HIT_THRESHOLD { SCORE_IF_ABOVE_THRESHOLD } else { 0.0 };

    let mut details = BTreeMap::new();
    details.insert("occurrences".to_string(), json!(occurrences));
    details.insert("score".to_string(), json!(score));

    ShieldOutcome::new("audit_trail", score >= VALID_THRESHOLD, details)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegong_sandbox::SandboxRegistry;

    #[test]
    fn never_reaches_validity_even_with_heavy_logging_vocabulary() {
        let registry = SandboxRegistry::new();
        let sandbox = registry.create("deadbeefcafebabe", false).unwrap();
        let text = b"log audit trace record journal log audit trace record journal";
        let outcome = validate(text, &sandbox.info);
        assert!(outcome.details.get("occurrences").unwrap().as_u64().unwrap() > HIT_THRESHOLD as u64);
        assert!(!outcome.valid);
    }
}
