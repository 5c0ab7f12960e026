//! T9 Governance Evasion: evading attribution, forensics, or accountability.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 5.0;

const PATTERNS: &[&str] = &[
    "attribution_evasion",
    "responsibility_obscure",
    "trace_elimination",
    "forensic_evasion",
    "accountability_bypass",
];

pub fn detect(text: &str) -> Option<ThreatDetection> {
    let (matches, evidence) = scan_patterns(text, PATTERNS);
    if matches == 0 {
        return None;
    }

    let mut severity = Severity::High;
    if matches > 3 {
        severity = severity.escalate();
    }

    Some(ThreatDetection {
        vector: ThreatVector::T9GovernanceEvasion,
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
    fn single_hit_detects() {
        let d = detect("trace_elimination routine").unwrap();
        assert_eq!(d.vector, ThreatVector::T9GovernanceEvasion);
    }
}
