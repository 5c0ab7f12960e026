//! End-to-end audit pipeline tests: empty input, harmless scripts,
//! fully-capable agents, a blatant single-vector threat, a maximally
//! suspicious artifact tripping every vector, and concurrent audits
//! sharing one engine.

use aegong_core::{AuditEngine, AuditEngineConfig};
use std::sync::Arc;

fn test_engine(dir: &std::path::Path) -> AuditEngine {
    let mut config = AuditEngineConfig::default();
    config.global.test_mode = true;
    config.storage.log_path = dir.join("audit.log");
    config.storage.reports_dir = dir.join("reports");
    AuditEngine::new(config).unwrap()
}

#[test]
fn empty_bytes_is_rejected_before_a_report_is_built() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine(dir.path());
    assert!(engine.audit(&[], "empty.bin").is_err());
}

#[test]
fn harmless_shell_script_yields_minimal_risk_non_agent_report() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine(dir.path());
    let report = engine.audit(b"#!/bin/sh\necho hi\n", "hello.sh").unwrap();

    assert!(!report.validation.is_agent);
    assert!(report.threats.is_empty());
    assert_eq!(report.overall_risk, 0.0);
    assert_eq!(report.risk_level, aegong_core::RiskLevel::Minimal);
    assert_eq!(report.shield_results.len(), 1);
}

#[test]
fn script_with_full_vocabulary_is_a_high_confidence_agent() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine(dir.path());
    let src = "def sense(x):\n    pass\ndef act(y):\n    pass\ndef decide(z):\n    pass\nself.memory = {}\nwhile True:\n    pass\n";
    let report = engine.audit(src.as_bytes(), "agent.py").unwrap();

    assert!(report.validation.is_agent);
    assert_eq!(report.validation.confidence, 0.9);
    assert!(report.validation.capabilities.len() >= 5);
}

#[test]
fn blatant_unauthorized_action_token_emits_one_high_severity_detection() {
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine(dir.path());
    let src = "def sense(x): pass\ndef act(y): pass\ndef decide(z): pass\nunauthorized_execute exec(\n";
    let report = engine.audit(src.as_bytes(), "agent.py").unwrap();

    let t4: Vec<_> = report
        .threats
        .iter()
        .filter(|t| t.vector == aegong_threats::ThreatVector::T4UnauthorizedAction)
        .collect();
    assert_eq!(t4.len(), 1);
    assert_eq!(t4[0].severity, aegong_threats::Severity::High);
    assert!(t4[0].evidence.len() >= 2);
}

#[test]
fn maximally_suspicious_script_trips_every_vector_and_reaches_elevated_risk() {
    // Every pattern from every T1-T9 pattern set, so each detector escalates
    // well past its base severity and reaches near-unity confidence.
    let dir = tempfile::tempdir().unwrap();
    let engine = test_engine(dir.path());
    let src = concat!(
        "def sense(x): pass\n",
        "def act(y): pass\n",
        "def decide(z): pass\n",
        "while True: pass\n",
        "chain.of.thought reasoning.override logic.redirect thought.injection ",
        "cognitive.manipulation prompt.hijack reasoning.path decision.override ",
        "override_reasoning hijack_logic manipulate_cognition\n",
        "goal.modification objective.drift reward.manipulation target.corruption ",
        "mission.override purpose.redirect goal.hijack objective.poison ",
        "reward_hack reward_exploit\n",
        "memory.poison knowledge.corrupt belief.inject memory.tamper ",
        "knowledge.manipulate persistent.poison memory.override knowledge.hijack\n",
        "unauthorized_execute bypass_permission escalate_privilege exec( system( ",
        "shell_exec popen( subprocess os.system runtime.exec\n",
        "resource_exhaustion memory_bomb cpu_intensive infinite_loop ",
        "resource_drain denial_of_service resource_starvation\n",
        "identity_spoof impersonate identity_theft credential_steal ",
        "token_hijack session_hijack identity_forge\n",
        "trust_manipulation social_engineering persuasion_tactics ",
        "authority_mimicry false_confidence trust_exploit\n",
        "alert_flood log_spam notification_bomb event_storm audit_overflow\n",
        "attribution_evasion responsibility_obscure trace_elimination ",
        "forensic_evasion accountability_bypass\n",
    );
    let report = engine.audit(src.as_bytes(), "maximal.py").unwrap();

    assert!(report.validation.is_agent);
    let vectors: std::collections::BTreeSet<_> = report.threats.iter().map(|t| t.vector).collect();
    assert_eq!(vectors.len(), 9);
    assert_eq!(report.risk_level, aegong_core::RiskLevel::Critical);
}

#[test]
fn three_concurrent_audits_share_one_engine_without_cross_contamination() {
    let dir = tempfile::tempdir().unwrap();
    let engine = Arc::new(test_engine(dir.path()));

    let payloads: Vec<(&str, &str)> = vec![
        ("#!/bin/sh\necho hi\n", "a.sh"),
        (
            "def sense(x): pass\ndef act(y): pass\ndef decide(z): pass\nwhile True: pass\n",
            "b.py",
        ),
        (
            "def sense(x): pass\ndef act(y): pass\ndef decide(z): pass\nunauthorized_execute exec(\n",
            "c.py",
        ),
    ];

    let handles: Vec<_> = payloads
        .into_iter()
        .map(|(src, name)| {
            let engine = Arc::clone(&engine);
            std::thread::spawn(move || engine.audit(src.as_bytes(), name).unwrap())
        })
        .collect();

    let reports: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(reports.len(), 3);

    let hashes: std::collections::BTreeSet<_> = reports.iter().map(|r| r.agent_hash.clone()).collect();
    assert_eq!(hashes.len(), 3);

    assert!(!reports[0].validation.is_agent);
    assert!(reports[1].validation.is_agent);
    assert!(reports[1].threats.is_empty());
    assert!(reports[2].threats.iter().any(|t| t.vector == aegong_threats::ThreatVector::T4UnauthorizedAction));
}
