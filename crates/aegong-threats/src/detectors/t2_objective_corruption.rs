//! T2 Objective Corruption: tampering with an agent's goal or reward signal.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 8.0;

const PATTERNS: &[&str] = &[
    "goal.modification",
    "objective.drift",
    "reward.manipulation",
    "target.corruption",
    "mission.override",
    "purpose.redirect",
    "goal.hijack",
    "objective.poison",
    "reward_hack",
    "reward_exploit",
];

pub fn detect(text: &str) -> Option<ThreatDetection> {
    let (matches, evidence) = scan_patterns(text, PATTERNS);
    if matches == 0 {
        return None;
    }

    let mut severity = Severity::Medium;
    if matches > 4 {
        severity = severity.escalate();
    }
    if matches > 6 {
        severity = severity.escalate();
    }

    Some(ThreatDetection {
        vector: ThreatVector::T2ObjectiveCorruption,
        severity,
        confidence: confidence(matches, DENOMINATOR),
        evidence,
        timestamp: chrono::Utc::now(),
        details: BTreeMap::new(),
    })
}
