//! The Agent Validator facade: format detection, per-format capability
//! scanning, confidence scoring, and agent-predicate evaluation.

use crate::confidence::{self, ConfidenceSource};
use crate::error::{Result, ValidatorError};
use crate::format::detect_format;
use crate::models::{ArtifactFormat, ValidationResult};
use crate::parsers::{elf, generic, jar, macho, pe, script, wasm, ScanOutcome};

/// Classifies an artifact and extracts its capability set.
///
/// A structural parse failure is never fatal: it is recorded as a reason
/// and recovered via the string-content fallback. Only an empty artifact
/// is rejected outright.
#[derive(Debug, Default, Clone, Copy)]
pub struct AgentValidator;

impl AgentValidator {
    pub fn new() -> Self {
        Self
    }

    pub fn validate(&self, bytes: &[u8], filename: &str, is_executable: bool) -> Result<ValidationResult> {
        if bytes.is_empty() {
            return Err(ValidatorError::Empty);
        }

        let format = detect_format(bytes, filename, is_executable);
        let (outcome, source) = self.scan(format, bytes);

        let is_agent = ValidationResult::agent_predicate(&outcome.capabilities);
        let mut reasons = outcome.reasons;
        let confidence = if is_agent {
            confidence::score(source, outcome.capabilities.len())
        } else {
            reasons.push("agent predicate not satisfied: requires perception, action, and (reasoning or memory)".to_string());
            confidence::NON_AGENT_CONFIDENCE
        };

        Ok(ValidationResult {
            is_agent,
            confidence,
            agent_type: format,
            capabilities: outcome.capabilities,
            reasons,
        })
    }

    fn scan(&self, format: ArtifactFormat, bytes: &[u8]) -> (ScanOutcome, ConfidenceSource) {
        match format {
            ArtifactFormat::Wasm => (wasm::scan(bytes), ConfidenceSource::Native),

            ArtifactFormat::Elf => match elf::scan(bytes) {
                Ok(outcome) => (outcome, ConfidenceSource::Native),
                Err(reason) => (self.fallback(bytes, &reason), ConfidenceSource::StringFallback),
            },

            ArtifactFormat::MachO => match macho::scan(bytes) {
                Ok(outcome) => (outcome, ConfidenceSource::Native),
                Err(reason) => (self.fallback(bytes, &reason), ConfidenceSource::StringFallback),
            },

            ArtifactFormat::Pe => match pe::scan(bytes) {
                Ok(mut outcome) if outcome.capabilities.is_empty() => {
                    // Section-scan wins when non-empty; an empty scan falls
                    // through to the string-content path.
                    let fallback = generic::scan(bytes);
                    outcome.merge(fallback);
                    (outcome, ConfidenceSource::StringFallback)
                }
                Ok(outcome) => (outcome, ConfidenceSource::Native),
                Err(reason) => (self.fallback(bytes, &reason), ConfidenceSource::StringFallback),
            },

            ArtifactFormat::Jar => match jar::scan(bytes) {
                Ok(outcome) => (outcome, ConfidenceSource::Jar),
                Err(reason) => (self.fallback(bytes, &reason), ConfidenceSource::StringFallback),
            },

            ArtifactFormat::Script => {
                let outcome = script::scan(bytes);
                let source = if outcome.autonomy_detected {
                    ConfidenceSource::ScriptWithAutonomy
                } else {
                    ConfidenceSource::ScriptWithoutAutonomy
                };
                (outcome, source)
            }

            ArtifactFormat::Library | ArtifactFormat::Executable | ArtifactFormat::Unknown => {
                (generic::scan(bytes), ConfidenceSource::StringFallback)
            }
        }
    }

    fn fallback(&self, bytes: &[u8], reason: &str) -> ScanOutcome {
        let mut outcome = generic::scan(bytes);
        outcome
            .reasons
            .insert(0, format!("structural parse failed ({reason}), falling back to string scan"));
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_artifact_is_rejected() {
        let validator = AgentValidator::new();
        let err = validator.validate(&[], "empty.bin", false).unwrap_err();
        assert!(matches!(err, ValidatorError::Empty));
    }

    #[test]
    fn harmless_text_file_is_not_an_agent() {
        let validator = AgentValidator::new();
        let result = validator.validate(b"hello world", "notes.txt", false).unwrap();
        assert!(!result.is_agent);
        assert_eq!(result.confidence, 0.0);
    }

    #[test]
    fn full_capability_script_is_an_agent() {
        let validator = AgentValidator::new();
        let src = b"def sense(x):\n    pass\ndef act(y):\n    pass\ndef decide(z):\n    pass\nwhile True:\n    pass\n";
        let result = validator.validate(src, "agent.py", false).unwrap();
        assert!(result.is_agent);
        assert_eq!(result.agent_type, ArtifactFormat::Script);
        assert!(result.confidence > 0.0);
    }

    #[test]
    fn malformed_elf_falls_back_to_string_scan() {
        let validator = AgentValidator::new();
        let mut bytes = vec![0x7f, 0x45, 0x4c, 0x46, 0xff, 0xff];
        bytes.extend_from_slice(b" observe_input act_on_output decide_next memory_store");
        let result = validator.validate(&bytes, "agent", false).unwrap();
        assert_eq!(result.agent_type, ArtifactFormat::Elf);
        assert!(result.reasons.iter().any(|r| r.contains("structural parse failed")));
    }
}
