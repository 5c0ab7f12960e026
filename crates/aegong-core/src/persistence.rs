//! Persisted report storage: one pretty-printed JSON file per report at
//! `<reports_dir>/report_<hash_prefix_8>.json`. The on-disk shape differs
//! from the in-memory `AuditReport` in a few renamed/re-typed fields:
//! `vector`/`severity` as ints plus a `_name` companion, shields nested
//! under `results`, narrative renamed `aegon_message`, validation nested
//! under `details`.

use crate::error::{AuditError, Result};
use crate::report::{AuditReport, ReportSummary, RiskLevel};
use aegong_threats::{Severity, ThreatDetection, ThreatVector};
use aegong_validator::{ArtifactFormat, Capability, ValidationResult};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::path::Path;

fn file_name(hash_prefix: &str) -> String {
    format!("report_{hash_prefix}.json")
}

pub fn report_to_document(report: &AuditReport) -> Value {
    let threats: Vec<Value> = report
        .threats
        .iter()
        .map(|t| {
            json!({
                "vector": t.vector.index(),
                "vector_name": t.vector.display_name(),
                "severity": t.severity.index(),
                "severity_name": t.severity.display_name(),
                "confidence": t.confidence,
                "evidence": t.evidence,
                "timestamp": t.timestamp,
                "details": t.details,
            })
        })
        .collect();

    let mut shield_results = serde_json::Map::new();
    for (name, outcome) in &report.shield_results {
        shield_results.insert(
            name.clone(),
            json!({
                "valid": outcome.valid,
                "results": outcome.details,
            }),
        );
    }

    json!({
        "agent_hash": report.agent_hash,
        "agent_name": report.agent_name,
        "timestamp": report.timestamp,
        "threats": threats,
        "shield_results": shield_results,
        "overall_risk": report.overall_risk,
        "risk_level": report.risk_level.display_name(),
        "recommendations": report.recommendations,
        "aegon_message": report.narrative,
        "details": {
            "validation": {
                "is_agent": report.validation.is_agent,
                "agent_type": report.validation.agent_type,
                "confidence": report.validation.confidence,
                "capabilities": report.validation.capabilities,
                "reasons": report.validation.reasons,
            },
        },
    })
}

pub fn document_to_report(doc: &Value) -> Result<AuditReport> {
    let get = |key: &str| doc.get(key).cloned().unwrap_or(Value::Null);

    let threats: Vec<ThreatDetection> = get("threats")
        .as_array()
        .cloned()
        .unwrap_or_default()
        .into_iter()
        .map(|t| -> Result<ThreatDetection> {
            let vector = vector_from_index(t["vector"].as_u64().unwrap_or(0) as u8)?;
            let severity = severity_from_index(t["severity"].as_u64().unwrap_or(0) as u8)?;
            Ok(ThreatDetection {
                vector,
                severity,
                confidence: t["confidence"].as_f64().unwrap_or(0.0),
                evidence: serde_json::from_value(t["evidence"].clone()).unwrap_or_default(),
                timestamp: serde_json::from_value(t["timestamp"].clone())
                    .map_err(|e| AuditError::Storage(e.to_string()))?,
                details: serde_json::from_value(t["details"].clone()).unwrap_or_default(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut shield_results = std::collections::BTreeMap::new();
    if let Some(obj) = get("shield_results").as_object() {
        for (name, value) in obj {
            let valid = value["valid"].as_bool().unwrap_or(false);
            let details = serde_json::from_value(value["results"].clone()).unwrap_or_default();
            shield_results.insert(name.clone(), aegong_shields::ShieldOutcome::new(name.clone(), valid, details));
        }
    }

    let details = get("details");
    let validation_doc = details.get("validation").cloned().unwrap_or(Value::Null);
    let capabilities: BTreeSet<Capability> =
        serde_json::from_value(validation_doc["capabilities"].clone()).unwrap_or_default();
    let validation = ValidationResult {
        is_agent: validation_doc["is_agent"].as_bool().unwrap_or(false),
        confidence: validation_doc["confidence"].as_f64().unwrap_or(0.0),
        agent_type: serde_json::from_value(validation_doc["agent_type"].clone())
            .unwrap_or(ArtifactFormat::Unknown),
        capabilities,
        reasons: serde_json::from_value(validation_doc["reasons"].clone()).unwrap_or_default(),
    };

    let risk_level_name = get("risk_level").as_str().unwrap_or("MINIMAL").to_string();
    let risk_level = match risk_level_name.as_str() {
        "LOW" => RiskLevel::Low,
        "MEDIUM" => RiskLevel::Medium,
        "HIGH" => RiskLevel::High,
        "CRITICAL" => RiskLevel::Critical,
        _ => RiskLevel::Minimal,
    };

    Ok(AuditReport {
        agent_hash: get("agent_hash").as_str().unwrap_or_default().to_string(),
        agent_name: get("agent_name").as_str().unwrap_or_default().to_string(),
        timestamp: serde_json::from_value(get("timestamp")).map_err(|e| AuditError::Storage(e.to_string()))?,
        threats,
        shield_results,
        overall_risk: get("overall_risk").as_f64().unwrap_or(0.0),
        risk_level,
        recommendations: serde_json::from_value(get("recommendations")).unwrap_or_default(),
        narrative: get("aegon_message").as_str().unwrap_or_default().to_string(),
        validation,
    })
}

fn vector_from_index(index: u8) -> Result<ThreatVector> {
    use ThreatVector::*;
    [
        T1ReasoningHijack,
        T2ObjectiveCorruption,
        T3MemoryPoisoning,
        T4UnauthorizedAction,
        T5ResourceManipulation,
        T6IdentitySpoofing,
        T7TrustManipulation,
        T8OversightSaturation,
        T9GovernanceEvasion,
    ]
    .get(index as usize)
    .copied()
    .ok_or_else(|| AuditError::Storage(format!("invalid threat vector index {index}")))
}

fn severity_from_index(index: u8) -> Result<Severity> {
    use Severity::*;
    [Low, Medium, High, Critical]
        .get(index as usize)
        .copied()
        .ok_or_else(|| AuditError::Storage(format!("invalid severity index {index}")))
}

pub fn save_report(reports_dir: &Path, report: &AuditReport) -> Result<()> {
    std::fs::create_dir_all(reports_dir).map_err(|e| AuditError::Storage(e.to_string()))?;
    let prefix_len = report.agent_hash.len().min(8);
    let path = reports_dir.join(file_name(&report.agent_hash[..prefix_len]));
    let document = report_to_document(report);
    let pretty = serde_json::to_string_pretty(&document).map_err(|e| AuditError::Storage(e.to_string()))?;
    std::fs::write(&path, pretty).map_err(|e| AuditError::Storage(e.to_string()))?;
    Ok(())
}

pub fn load_report(reports_dir: &Path, hash_prefix: &str) -> Result<AuditReport> {
    let path = reports_dir.join(file_name(hash_prefix));
    let contents = std::fs::read_to_string(&path).map_err(|_| AuditError::ReportNotFound(hash_prefix.to_string()))?;
    let document: Value = serde_json::from_str(&contents).map_err(|e| AuditError::Storage(e.to_string()))?;
    document_to_report(&document)
}

pub fn list_reports(reports_dir: &Path) -> Result<Vec<ReportSummary>> {
    if !reports_dir.exists() {
        return Ok(Vec::new());
    }
    let mut summaries = Vec::new();
    for entry in std::fs::read_dir(reports_dir).map_err(|e| AuditError::Storage(e.to_string()))? {
        let entry = entry.map_err(|e| AuditError::Storage(e.to_string()))?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let contents = std::fs::read_to_string(&path).map_err(|e| AuditError::Storage(e.to_string()))?;
        let document: Value = serde_json::from_str(&contents).map_err(|e| AuditError::Storage(e.to_string()))?;
        let report = document_to_report(&document)?;
        summaries.push(ReportSummary::from(&report));
    }
    summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::AuditReport;

    fn sample_report() -> AuditReport {
        AuditReport {
            agent_hash: "deadbeefcafebabe0000000000000000000000000000000000000000000000".to_string(),
            agent_name: "sample.py".to_string(),
            timestamp: chrono::Utc::now(),
            threats: vec![],
            shield_results: Default::default(),
            overall_risk: 0.0,
            risk_level: RiskLevel::Minimal,
            recommendations: vec![],
            narrative: "clean".to_string(),
            validation: ValidationResult::not_agent(ArtifactFormat::Script, "no capabilities".to_string()),
        }
    }

    #[test]
    fn round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let report = sample_report();
        save_report(dir.path(), &report).unwrap();

        let loaded = load_report(dir.path(), "deadbeef").unwrap();
        assert_eq!(loaded.agent_hash, report.agent_hash);
        assert_eq!(loaded.agent_name, report.agent_name);
        assert_eq!(loaded.narrative, report.narrative);
    }

    #[test]
    fn list_reports_returns_persisted_summaries() {
        let dir = tempfile::tempdir().unwrap();
        save_report(dir.path(), &sample_report()).unwrap();
        let summaries = list_reports(dir.path()).unwrap();
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].hash_prefix, "deadbeef");
    }

    #[test]
    fn missing_report_is_reported_as_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_report(dir.path(), "abcd1234").unwrap_err();
        assert!(matches!(err, AuditError::ReportNotFound(_)));
    }
}
