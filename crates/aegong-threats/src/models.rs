//! Threat taxonomy: the nine agent-specific manipulation classes this
//! pipeline is able to recognize, and the severity scale they're scored on.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One of the nine fixed threat classes.
///
/// Detectors are registered one-per-vector; the vector a detector produces
/// never varies at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ThreatVector {
    T1ReasoningHijack,
    T2ObjectiveCorruption,
    T3MemoryPoisoning,
    T4UnauthorizedAction,
    T5ResourceManipulation,
    T6IdentitySpoofing,
    T7TrustManipulation,
    T8OversightSaturation,
    T9GovernanceEvasion,
}

impl ThreatVector {
    /// Zero-based index matching declaration order (T1 = 0 .. T9 = 8), used
    /// by the persisted report format's `vector` field.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    /// Fixed display name used in evidence, recommendations, and reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::T1ReasoningHijack => "Reasoning Path Hijacking",
            Self::T2ObjectiveCorruption => "Objective Function Corruption",
            Self::T3MemoryPoisoning => "Memory Poisoning",
            Self::T4UnauthorizedAction => "Unauthorized Action",
            Self::T5ResourceManipulation => "Resource Manipulation",
            Self::T6IdentitySpoofing => "Identity Spoofing",
            Self::T7TrustManipulation => "Trust Manipulation",
            Self::T8OversightSaturation => "Oversight Saturation",
            Self::T9GovernanceEvasion => "Governance Evasion",
        }
    }

    /// Short narrative gloss, one clause describing what this vector
    /// represents, for splicing into the per-vector narrative line.
    pub fn gloss(&self) -> &'static str {
        match self {
            Self::T1ReasoningHijack => "attempts to redirect or override decision logic",
            Self::T2ObjectiveCorruption => "attempts to drift or corrupt the agent's objective function",
            Self::T3MemoryPoisoning => "attempts to inject or tamper with persisted memory",
            Self::T4UnauthorizedAction => "attempts to execute actions outside its granted permissions",
            Self::T5ResourceManipulation => "attempts to exhaust or monopolize host resources",
            Self::T6IdentitySpoofing => "attempts to impersonate another identity or steal credentials",
            Self::T7TrustManipulation => "attempts to manipulate trust through social engineering",
            Self::T8OversightSaturation => "attempts to flood oversight channels with noise",
            Self::T9GovernanceEvasion => "attempts to evade attribution and accountability",
        }
    }

    /// Recommendation string prefix for this vector, per the fixed mapping.
    pub fn recommendation_action(&self) -> &'static str {
        match self {
            Self::T1ReasoningHijack => "Implement reasoning path validation and chain-of-thought integrity checks",
            Self::T2ObjectiveCorruption => "Deploy objective integrity checks and goal-drift monitoring",
            Self::T3MemoryPoisoning => "Enforce memory write validation and knowledge-base integrity checks",
            Self::T4UnauthorizedAction => "Restrict execution capabilities and enforce permission boundaries",
            Self::T5ResourceManipulation => "Apply resource quotas and execution time limits",
            Self::T6IdentitySpoofing => "Strengthen identity verification and credential handling",
            Self::T7TrustManipulation => "Add trust-boundary enforcement and social-engineering detection",
            Self::T8OversightSaturation => "Rate-limit alerting and deduplicate audit events",
            Self::T9GovernanceEvasion => "Enforce attribution logging and tamper-evident accountability trails",
        }
    }
}

/// Totally ordered severity scale; `weight()` feeds directly into risk math.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

impl Severity {
    /// Zero-based index matching declaration order (Low = 0 .. Critical =
    /// 3), used by the persisted report format's `severity` field.
    pub fn index(&self) -> u8 {
        *self as u8
    }

    pub fn weight(&self) -> f64 {
        match self {
            Self::Low => 0.25,
            Self::Medium => 0.50,
            Self::High => 0.75,
            Self::Critical => 1.00,
        }
    }

    /// One step up the scale, saturating at `Critical`.
    pub fn escalate(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Critical,
            Self::Critical => Self::Critical,
        }
    }

    /// Fixed display name, used by the persisted report format's
    /// `severity_name` field.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Critical => "CRITICAL",
        }
    }
}

/// One detector's verdict for a single scan pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreatDetection {
    pub vector: ThreatVector,
    pub severity: Severity,
    pub confidence: f64,
    pub evidence: Vec<String>,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub details: BTreeMap<String, String>,
}
