//! T5 Resource Manipulation: denial-of-service-shaped resource abuse.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 5.0;

const PATTERNS: &[&str] = &[
    "resource_exhaustion",
    "memory_bomb",
    "cpu_intensive",
    "infinite_loop",
    "resource_drain",
    "denial_of_service",
    "resource_starvation",
];

pub fn detect(text: &str) -> Option<ThreatDetection> {
    let (matches, evidence) = scan_patterns(text, PATTERNS);
    if matches == 0 {
        return None;
    }

    let mut severity = Severity::Medium;
    if matches > 3 {
        severity = severity.escalate();
    }

    Some(ThreatDetection {
        vector: ThreatVector::T5ResourceManipulation,
        severity,
        confidence: confidence(matches, DENOMINATOR),
        evidence,
        timestamp: chrono::Utc::now(),
        details: BTreeMap::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escalates_past_three_matches() {
        let text = "memory_bomb cpu_intensive infinite_loop resource_drain";
        let d = detect(text).unwrap();
        assert_eq!(d.severity, Severity::High);
    }
}
