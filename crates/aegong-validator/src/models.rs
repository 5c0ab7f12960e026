//! Core data types for the Agent Validator.
//!
//! These types encode the artifact classification taxonomy: the format an
//! artifact is parsed as, the capability vocabulary used to decide whether
//! it qualifies as an "agent", and the result of running the full
//! validation pipeline over a byte blob.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The format an artifact was classified as.
///
/// Determined from magic bytes first, extension second, executable-bit
/// third (see [`crate::format::detect_format`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ArtifactFormat {
    Wasm,
    Elf,
    Pe,
    MachO,
    Script,
    Jar,
    Library,
    Executable,
    Unknown,
}

impl ArtifactFormat {
    /// Human-readable name, used in report narratives and reasons.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Wasm => "WebAssembly module",
            Self::Elf => "ELF binary",
            Self::Pe => "PE executable",
            Self::MachO => "Mach-O binary",
            Self::Script => "script",
            Self::Jar => "Java archive",
            Self::Library => "shared library",
            Self::Executable => "executable",
            Self::Unknown => "unknown artifact",
        }
    }
}

/// A capability an artifact can exhibit.
///
/// Capabilities are extracted by keyword/symbol matching and combined into
/// the agent predicate: `Perception ∧ Action ∧ (Reasoning ∨ Memory)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Capability {
    Perception,
    Action,
    Reasoning,
    Memory,
    Autonomy,
    AiLibraries,
    AgentClass,
}

/// Result of classifying and scanning an artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the artifact satisfies the agent predicate.
    pub is_agent: bool,
    /// Confidence in the classification, `0.0..=1.0`.
    pub confidence: f64,
    /// The detected artifact format.
    pub agent_type: ArtifactFormat,
    /// Capabilities discovered during the scan.
    pub capabilities: BTreeSet<Capability>,
    /// Ordered human-readable explanations, most specific last.
    pub reasons: Vec<String>,
}

impl ValidationResult {
    /// Builds a non-agent result with a single explanatory reason.
    pub fn not_agent(agent_type: ArtifactFormat, reason: impl Into<String>) -> Self {
        Self {
            is_agent: false,
            confidence: 0.0,
            agent_type,
            capabilities: BTreeSet::new(),
            reasons: vec![reason.into()],
        }
    }

    /// Evaluates the agent predicate from §3: `Perception ∈ caps ∧ Action ∈
    /// caps ∧ (Reasoning ∈ caps ∨ Memory ∈ caps)`.
    pub fn agent_predicate(capabilities: &BTreeSet<Capability>) -> bool {
        capabilities.contains(&Capability::Perception)
            && capabilities.contains(&Capability::Action)
            && (capabilities.contains(&Capability::Reasoning)
                || capabilities.contains(&Capability::Memory))
    }
}
