//! T3 Memory Poisoning: corrupting an agent's persistent knowledge store.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 7.0;

const PATTERNS: &[&str] = &[
    "memory.poison",
    "knowledge.corrupt",
    "belief.inject",
    "memory.tamper",
    "knowledge.manipulate",
    "persistent.poison",
    "memory.override",
    "knowledge.hijack",
];

pub fn detect(text: &str) -> Option<ThreatDetection> {
    let (matches, evidence) = scan_patterns(text, PATTERNS);
    if matches == 0 {
        return None;
    }

    let mut severity = Severity::High;
    if matches > 5 {
        severity = severity.escalate();
    }

    Some(ThreatDetection {
        vector: ThreatVector::T3MemoryPoisoning,
        severity,
        confidence: confidence(matches, DENOMINATOR),
        evidence,
        timestamp: chrono::Utc::now(),
        details: BTreeMap::new(),
    })
}
