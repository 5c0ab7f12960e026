//! T8 Oversight Saturation: drowning human/automated review in noise.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 5.0;

const PATTERNS: &[&str] = &[
    "alert_flood",
    "log_spam",
    "notification_bomb",
    "event_storm",
    "audit_overflow",
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
        vector: ThreatVector::T8OversightSaturation,
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
    fn base_severity_is_medium() {
        let d = detect("log_spam observed").unwrap();
        assert_eq!(d.severity, Severity::Medium);
    }
}
