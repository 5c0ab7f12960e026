//! T4 Unauthorized Action: privilege-bypassing execution or dangerous calls.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 6.0;

const PATTERNS: &[&str] = &[
    "unauthorized_execute",
    "bypass_permission",
    "escalate_privilege",
    "exec(",
    "system(",
    "shell_exec",
    "popen(",
    "subprocess",
    "os.system",
    "runtime.exec",
];

pub fn detect(text: &str) -> Option<ThreatDetection> {
    let (matches, evidence) = scan_patterns(text, PATTERNS);
    if matches == 0 {
        return None;
    }

    let mut severity = Severity::High;
    if matches > 4 {
        severity = severity.escalate();
    }

    Some(ThreatDetection {
        vector: ThreatVector::T4UnauthorizedAction,
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
    fn blatant_token_pair_detects_with_two_evidence_lines() {
        let d = detect("unauthorized_execute then exec(cmd)").unwrap();
        assert_eq!(d.vector, ThreatVector::T4UnauthorizedAction);
        assert_eq!(d.severity, Severity::High);
        assert!(d.evidence.len() >= 2);
    }
}
