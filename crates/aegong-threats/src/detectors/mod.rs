//! Detector registry and the pattern-matching helper shared by every T1-T9
//! module.

mod t1_reasoning_hijack;
mod t2_objective_corruption;
mod t3_memory_poisoning;
mod t4_unauthorized_action;
mod t5_resource_manipulation;
mod t6_identity_spoofing;
mod t7_trust_manipulation;
mod t8_oversight_saturation;
mod t9_governance_evasion;

use crate::models::ThreatDetection;
use std::panic::{self, AssertUnwindSafe};

/// A detector is a stateless `bytes-as-text -> at most one ThreatDetection`
/// function. Registration order here is the order detections are merged in
/// by the engine.
pub fn registry() -> Vec<(&'static str, fn(&str) -> Option<ThreatDetection>)> {
    vec![
        ("T1_REASONING_HIJACK", t1_reasoning_hijack::detect),
        ("T2_OBJECTIVE_CORRUPTION", t2_objective_corruption::detect),
        ("T3_MEMORY_POISONING", t3_memory_poisoning::detect),
        ("T4_UNAUTHORIZED_ACTION", t4_unauthorized_action::detect),
        ("T5_RESOURCE_MANIPULATION", t5_resource_manipulation::detect),
        ("T6_IDENTITY_SPOOFING", t6_identity_spoofing::detect),
        ("T7_TRUST_MANIPULATION", t7_trust_manipulation::detect),
        ("T8_OVERSIGHT_SATURATION", t8_oversight_saturation::detect),
        ("T9_GOVERNANCE_EVASION", t9_governance_evasion::detect),
    ]
}

/// Runs every registered detector over `text`, in registration order. A
/// detector that panics is isolated: the panic is caught, logged, and the
/// remaining detectors still run rather than aborting the whole pass.
pub fn detect_all(text: &str) -> Vec<ThreatDetection> {
    registry()
        .into_iter()
        .filter_map(|(name, detect)| match panic::catch_unwind(AssertUnwindSafe(|| detect(text))) {
            Ok(detection) => detection,
            Err(_) => {
                tracing::error!(detector = name, "detector panicked; skipping");
                None
            }
        })
        .collect()
}

/// Counts case-insensitive substring hits of each pattern in `patterns`
/// against `text`, returning the total hit count and one evidence line per
/// matched pattern.
pub(crate) fn scan_patterns(text: &str, patterns: &[&str]) -> (usize, Vec<String>) {
    let lower = text.to_ascii_lowercase();
    let mut count = 0;
    let mut evidence = Vec::new();
    for pattern in patterns {
        if lower.contains(&pattern.to_ascii_lowercase()) {
            count += 1;
            evidence.push(format!("matched pattern '{pattern}'"));
        }
    }
    (count, evidence)
}

pub(crate) fn confidence(matches: usize, denominator: f64) -> f64 {
    (matches as f64 / denominator).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_panicking_detector_is_isolated_and_the_rest_still_run() {
        fn panics(_: &str) -> Option<ThreatDetection> {
            panic!("simulated detector failure")
        }

        let hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(|_| {}));
        let results: Vec<Option<ThreatDetection>> = [("panics", panics as fn(&str) -> Option<ThreatDetection>), ("t4", t4_unauthorized_action::detect)]
            .into_iter()
            .map(|(name, detect)| match panic::catch_unwind(AssertUnwindSafe(|| detect("unauthorized_execute exec("))) {
                Ok(detection) => detection,
                Err(_) => {
                    tracing::error!(detector = name, "detector panicked; skipping");
                    None
                }
            })
            .collect();
        std::panic::set_hook(hook);

        assert!(results[0].is_none());
        assert!(results[1].is_some());
    }
}
