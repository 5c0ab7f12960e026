//! Confidence scoring tables.
//!
//! Each table is keyed by `n = |capabilities|`, clamped to the table's
//! highest defined bucket for any larger count.

/// Source of the capability scan, determining which confidence table
/// applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceSource {
    /// Native structural parse (Elf/Pe/MachO/Jar with exact section/symbol
    /// data, or Wasm's keyword scan).
    Native,
    /// String-content fallback path (Library/Executable with no
    /// recognizable magic, or a failed structural parse).
    StringFallback,
    /// Jar archive entry name matching.
    Jar,
    /// Script with at least one autonomy pattern detected.
    ScriptWithAutonomy,
    /// Script with no autonomy pattern detected.
    ScriptWithoutAutonomy,
}

/// Looks up confidence for `n` matched capabilities under `source`. Callers
/// should use [`NON_AGENT_CONFIDENCE`] instead when the agent predicate
/// does not hold.
pub fn score(source: ConfidenceSource, n: usize) -> f64 {
    match source {
        ConfidenceSource::Native => match n {
            0..=1 => 0.0,
            2 => 0.5,
            3 => 0.75,
            _ => 0.9,
        },
        ConfidenceSource::StringFallback => match n {
            0..=1 => 0.0,
            2 => 0.4,
            3 => 0.6,
            _ => 0.75,
        },
        ConfidenceSource::Jar => match n {
            0..=1 => 0.0,
            2 => 0.5,
            3 => 0.7,
            4 => 0.85,
            _ => 0.95,
        },
        ConfidenceSource::ScriptWithAutonomy => match n {
            0..=2 => 0.9, // override: any autonomy-bearing script with the
            // agent predicate satisfied reads as high-confidence
            _ => 0.9,
        },
        ConfidenceSource::ScriptWithoutAutonomy => match n {
            0..=1 => 0.0,
            2 => 0.5,
            3 => 0.7,
            _ => 0.8,
        },
    }
}

/// The confidence recorded when the agent predicate fails.
pub const NON_AGENT_CONFIDENCE: f64 = 0.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_table_scales_with_capability_count() {
        assert_eq!(score(ConfidenceSource::Native, 2), 0.5);
        assert_eq!(score(ConfidenceSource::Native, 3), 0.75);
        assert_eq!(score(ConfidenceSource::Native, 4), 0.9);
        assert_eq!(score(ConfidenceSource::Native, 5), 0.9);
    }

    #[test]
    fn jar_table_has_six_plus_bucket() {
        assert_eq!(score(ConfidenceSource::Jar, 4), 0.85);
        assert_eq!(score(ConfidenceSource::Jar, 6), 0.95);
    }

    #[test]
    fn script_with_autonomy_overrides_to_point_nine() {
        assert_eq!(score(ConfidenceSource::ScriptWithAutonomy, 3), 0.9);
        assert_eq!(score(ConfidenceSource::ScriptWithAutonomy, 5), 0.9);
    }
}
