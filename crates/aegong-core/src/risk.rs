//! Composite risk math: `(mean(r_i) + max(r_i)) / 2` where
//! `r_i = weight(severity_i) * confidence_i`, clamped to `[0, 1]`.

use aegong_threats::ThreatDetection;

pub fn overall_risk(threats: &[ThreatDetection]) -> f64 {
    if threats.is_empty() {
        return 0.0;
    }

    let weighted: Vec<f64> = threats.iter().map(|t| t.severity.weight() * t.confidence).collect();
    let sum: f64 = weighted.iter().sum();
    let avg = sum / weighted.len() as f64;
    let max = weighted.iter().cloned().fold(f64::MIN, f64::max);

    ((avg + max) / 2.0).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegong_threats::{Severity, ThreatVector};
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn threat(severity: Severity, confidence: f64) -> ThreatDetection {
        ThreatDetection {
            vector: ThreatVector::T1ReasoningHijack,
            severity,
            confidence,
            evidence: vec![],
            timestamp: Utc::now(),
            details: BTreeMap::new(),
        }
    }

    #[test]
    fn no_threats_yields_zero_risk() {
        assert_eq!(overall_risk(&[]), 0.0);
    }

    #[test]
    fn single_threat_risk_is_its_own_weighted_score() {
        let threats = vec![threat(Severity::High, 0.8)];
        // r = 0.75 * 0.8 = 0.6; avg == max == 0.6
        assert!((overall_risk(&threats) - 0.6).abs() < 1e-9);
    }

    #[test]
    fn multiple_threats_average_with_the_max() {
        let threats = vec![threat(Severity::Low, 1.0), threat(Severity::Critical, 1.0)];
        // r1 = 0.25, r2 = 1.0; avg = 0.625; max = 1.0; result = 0.8125
        assert!((overall_risk(&threats) - 0.8125).abs() < 1e-9);
    }

    #[test]
    fn risk_never_exceeds_one() {
        let threats = vec![threat(Severity::Critical, 1.0), threat(Severity::Critical, 1.0)];
        assert!(overall_risk(&threats) <= 1.0);
    }
}
