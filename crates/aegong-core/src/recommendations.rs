//! Recommendation synthesis: one line per distinct threat vector present,
//! one line per failing shield, insertion order preserved (first-seen
//! vector order, then shield registration order).

use aegong_shields::ShieldOutcome;
use aegong_threats::{ThreatDetection, ThreatVector};

pub fn build(threats: &[ThreatDetection], shields_in_order: &[ShieldOutcome]) -> Vec<String> {
    let mut recommendations = Vec::new();

    let mut seen: Vec<ThreatVector> = Vec::new();
    for threat in threats {
        if !seen.contains(&threat.vector) {
            seen.push(threat.vector);
        }
    }
    for vector in seen {
        let count = threats.iter().filter(|t| t.vector == vector).count();
        recommendations.push(format!("{} ({count} instances detected)", vector.recommendation_action()));
    }

    for shield in shields_in_order {
        if !shield.valid {
            recommendations.push(format!("Address {} module validation failures", shield.name));
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegong_threats::Severity;
    use chrono::Utc;
    use std::collections::BTreeMap;

    fn threat(vector: ThreatVector) -> ThreatDetection {
        ThreatDetection {
            vector,
            severity: Severity::Low,
            confidence: 0.5,
            evidence: vec![],
            timestamp: Utc::now(),
            details: BTreeMap::new(),
        }
    }

    fn shield(name: &str, valid: bool) -> ShieldOutcome {
        ShieldOutcome::new(name, valid, BTreeMap::new())
    }

    #[test]
    fn one_recommendation_per_distinct_vector() {
        let threats = vec![
            threat(ThreatVector::T1ReasoningHijack),
            threat(ThreatVector::T1ReasoningHijack),
            threat(ThreatVector::T4UnauthorizedAction),
        ];
        let recs = build(&threats, &[]);
        assert_eq!(recs.len(), 2);
        assert!(recs[0].contains("2 instances detected"));
        assert!(recs[0].starts_with(ThreatVector::T1ReasoningHijack.recommendation_action()));
    }

    #[test]
    fn failing_shields_each_get_a_recommendation() {
        let shields = vec![shield("segmentation", true), shield("heuristic", false), shield("integrity", false)];
        let recs = build(&[], &shields);
        assert_eq!(recs, vec!["Address heuristic module validation failures", "Address integrity module validation failures"]);
    }
}
