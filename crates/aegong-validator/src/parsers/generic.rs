//! String-content fallback scanner.
//!
//! Used when a `Library`/`Executable` artifact's magic bytes don't resolve
//! to a recognized structural format, and as the last resort for any format
//! whose structural parse fails. Performs a flat case-insensitive substring
//! scan over the raw bytes.

use super::ScanOutcome;
use crate::capability::{scan_bytes_for_ai_libraries, KEYWORD_SETS};

/// Scans raw bytes for every keyword set (including AiLibraries), ignoring
/// structure entirely.
pub fn scan(bytes: &[u8]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let lower: Vec<u8> = bytes.iter().map(|b| b.to_ascii_lowercase()).collect();

    for set in KEYWORD_SETS {
        for kw in set.keywords {
            if contains_subslice(&lower, kw.as_bytes()) {
                outcome.capabilities.insert(set.capability);
                outcome
                    .reasons
                    .push(format!("string fallback matched '{kw}'"));
            }
        }
    }
    scan_bytes_for_ai_libraries(bytes, false, &mut outcome.capabilities);
    outcome
}

fn contains_subslice(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() || needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Capability;

    #[test]
    fn finds_perception_and_action() {
        let outcome = scan(b"this binary can sense and respond to events");
        assert!(outcome.capabilities.contains(&Capability::Perception));
        assert!(outcome.capabilities.contains(&Capability::Action));
    }
}
