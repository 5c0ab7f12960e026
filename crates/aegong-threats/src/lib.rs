//! T1-T9 threat detectors: stateless, deterministic pattern scanners run
//! over both an artifact's raw bytes and its simulated execution log.

pub mod detectors;
pub mod models;

pub use detectors::detect_all;
pub use models::{Severity, ThreatDetection, ThreatVector};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximally_suspicious_text_triggers_all_nine_vectors() {
        let text = concat!(
            "chain.of.thought reasoning.override logic.redirect thought.injection cognitive.manipulation prompt.hijack ",
            "goal.modification objective.drift reward.manipulation target.corruption mission.override purpose.redirect goal.hijack ",
            "memory.poison knowledge.corrupt belief.inject memory.tamper knowledge.manipulate persistent.poison ",
            "unauthorized_execute bypass_permission escalate_privilege exec( system( ",
            "resource_exhaustion memory_bomb cpu_intensive infinite_loop ",
            "identity_spoof impersonate identity_theft credential_steal ",
            "trust_manipulation social_engineering persuasion_tactics authority_mimicry ",
            "alert_flood log_spam notification_bomb event_storm ",
            "attribution_evasion responsibility_obscure trace_elimination forensic_evasion",
        );
        let threats = detect_all(text);
        assert_eq!(threats.len(), 9);
    }

    #[test]
    fn harmless_text_triggers_nothing() {
        assert!(detect_all("a perfectly ordinary artifact with no suspicious content").is_empty());
    }
}
