//! T6 Identity Spoofing: impersonation and credential/session hijacking.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 5.0;

const PATTERNS: &[&str] = &[
    "identity_spoof",
    "impersonate",
    "identity_theft",
    "credential_steal",
    "token_hijack",
    "session_hijack",
    "identity_forge",
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
        vector: ThreatVector::T6IdentitySpoofing,
        severity,
        confidence: confidence(matches, DENOMINATOR),
        evidence,
        timestamp: chrono::Utc::now(),
        details: BTreeMap::new(),
    })
}
