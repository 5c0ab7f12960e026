//! T1 Reasoning Hijack: attempts to redirect or override an agent's
//! chain-of-thought or decision logic.

use super::{confidence, scan_patterns};
use crate::models::{Severity, ThreatDetection, ThreatVector};
use regex::Regex;
use std::collections::BTreeMap;

const DENOMINATOR: f64 = 10.0;
const COMPLEX_CONDITIONAL_THRESHOLD: usize = 10;

const PATTERNS: &[&str] = &[
    "chain.of.thought",
    "reasoning.override",
    "logic.redirect",
    "thought.injection",
    "cognitive.manipulation",
    "prompt.hijack",
    "reasoning.path",
    "decision.override",
    "override_reasoning",
    "hijack_logic",
    "manipulate_cognition",
];

pub fn detect(text: &str) -> Option<ThreatDetection> {
    let (matches, mut evidence) = scan_patterns(text, PATTERNS);
    if matches == 0 {
        return None;
    }

    let mut severity = Severity::Low;
    if matches > 3 {
        severity = severity.escalate();
    }
    if matches > 5 {
        severity = severity.escalate();
    }

    let complex_count = count_complex_conditionals(text);
    let mut details = BTreeMap::new();
    details.insert("complex_conditional_count".to_string(), complex_count.to_string());
    if complex_count > COMPLEX_CONDITIONAL_THRESHOLD {
        evidence.push(format!(
            "found {complex_count} complex conditional blocks (>3 '&&' or '||' operands), exceeding the escalation threshold"
        ));
        severity = severity.escalate();
    }

    Some(ThreatDetection {
        vector: ThreatVector::T1ReasoningHijack,
        severity,
        confidence: confidence(matches, DENOMINATOR),
        evidence,
        timestamp: chrono::Utc::now(),
        details,
    })
}

/// Counts `if (...) { ... }`-shaped blocks whose condition contains more
/// than three `&&` or more than three `||` operators.
fn count_complex_conditionals(text: &str) -> usize {
    let re = Regex::new(r"if\s*\(([^()]*)\)").expect("static conditional regex is valid");
    re.captures_iter(text)
        .filter(|caps| {
            let condition = &caps[1];
            condition.matches("&&").count() > 3 || condition.matches("||").count() > 3
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_patterns_no_detection() {
        assert!(detect("nothing suspicious here").is_none());
    }

    #[test]
    fn single_pattern_is_low_severity() {
        let d = detect("calls reasoning.override somewhere").unwrap();
        assert_eq!(d.severity, Severity::Low);
    }

    #[test]
    fn four_patterns_escalate_to_medium() {
        let text = "chain.of.thought reasoning.override logic.redirect thought.injection";
        let d = detect(text).unwrap();
        assert_eq!(d.severity, Severity::Medium);
    }

    #[test]
    fn six_patterns_escalate_to_high() {
        let text = "chain.of.thought reasoning.override logic.redirect thought.injection cognitive.manipulation prompt.hijack";
        let d = detect(text).unwrap();
        assert_eq!(d.severity, Severity::High);
    }

    #[test]
    fn counts_complex_conditionals() {
        let text = "if (a && b && c && d && e) { reasoning.override }";
        let count = count_complex_conditionals(text);
        assert_eq!(count, 1);
    }
}
