//! Narrative synthesis: a fixed template keyed by `risk_level`, splicing
//! the agent name, threat count, and a short gloss per distinct vector
//! present.

use crate::report::RiskLevel;
use aegong_threats::{ThreatDetection, ThreatVector};

fn opening(risk_level: RiskLevel, agent_name: &str) -> String {
    match risk_level {
        RiskLevel::Minimal => format!("{agent_name} shows no indication of agent-specific manipulation behavior."),
        RiskLevel::Low => format!("{agent_name} carries a low-risk profile with isolated, low-severity findings."),
        RiskLevel::Medium => format!("{agent_name} exhibits a moderate risk profile that warrants review before deployment."),
        RiskLevel::High => format!("{agent_name} exhibits a high risk profile; multiple manipulation patterns were detected."),
        RiskLevel::Critical => format!("{agent_name} is classified CRITICAL risk and should not be deployed without remediation."),
    }
}

pub fn build(risk_level: RiskLevel, agent_name: &str, threats: &[ThreatDetection]) -> String {
    let mut narrative = opening(risk_level, agent_name);

    if threats.is_empty() {
        return narrative;
    }

    narrative.push_str(&format!(" {} threat indicator(s) were detected:", threats.len()));

    let mut seen: Vec<ThreatVector> = Vec::new();
    for threat in threats {
        if !seen.contains(&threat.vector) {
            seen.push(threat.vector);
        }
    }
    for vector in seen {
        narrative.push_str(&format!(" {} ({})", vector.display_name(), vector.gloss()));
        narrative.push(';');
    }
    if narrative.ends_with(';') {
        narrative.pop();
        narrative.push('.');
    }

    narrative
}
