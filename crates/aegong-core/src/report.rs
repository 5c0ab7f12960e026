//! The `AuditReport` data model: everything one completed audit produces.

use aegong_shields::ShieldOutcome;
use aegong_threats::ThreatDetection;
use aegong_validator::ValidationResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Bucketed label derived deterministically from `overall_risk`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLevel {
    Minimal,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Buckets a clamped `overall_risk` value into one of five levels.
    pub fn from_risk(overall_risk: f64) -> Self {
        match overall_risk {
            r if r < 0.2 => Self::Minimal,
            r if r < 0.4 => Self::Low,
            r if r < 0.6 => Self::Medium,
            r if r < 0.8 => Self::High,
            _ => Self::Critical,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Minimal => "MINIMAL",
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// The completed result of auditing one artifact.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditReport {
    pub agent_hash: String,
    pub agent_name: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub threats: Vec<ThreatDetection>,
    pub shield_results: BTreeMap<String, ShieldOutcome>,
    pub overall_risk: f64,
    pub risk_level: RiskLevel,
    pub recommendations: Vec<String>,
    pub narrative: String,
    pub validation: ValidationResult,
}

/// One row of `list_reports()`'s output: the subset of a report relevant
/// to a listing view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSummary {
    pub hash_prefix: String,
    pub agent_name: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub overall_risk: f64,
    pub risk_level: RiskLevel,
    pub threat_count: usize,
}

impl From<&AuditReport> for ReportSummary {
    fn from(report: &AuditReport) -> Self {
        let prefix_len = report.agent_hash.len().min(8);
        Self {
            hash_prefix: report.agent_hash[..prefix_len].to_string(),
            agent_name: report.agent_name.clone(),
            timestamp: report.timestamp,
            overall_risk: report.overall_risk,
            risk_level: report.risk_level,
            threat_count: report.threats.len(),
        }
    }
}
