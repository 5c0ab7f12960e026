//! T7 Trust Manipulation: social-engineering and authority-mimicry tactics.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 6.0;

const PATTERNS: &[&str] = &[
    "trust_manipulation",
    "social_engineering",
    "persuasion_tactics",
    "authority_mimicry",
    "false_confidence",
    "trust_exploit",
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
        vector: ThreatVector::T7TrustManipulation,
        severity,
        confidence: confidence(matches, DENOMINATOR),
        evidence,
        timestamp: chrono::Utc::now(),
        details: BTreeMap::new(),
    })
}
