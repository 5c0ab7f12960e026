//! Wasm capability scanner.
//!
//! Does a case-insensitive substring search of the raw bytes for the
//! keyword lists, a deliberate approximation of a full section parse.
//! Module names and export names live in Wasm's custom/name sections as
//! raw UTF-8, so a flat byte scan already catches the common case without
//! needing a full section walk.

use super::ScanOutcome;
use crate::capability::{scan_bytes_for_ai_libraries, KEYWORD_SETS};
use crate::models::Capability;

/// Additional Memory-bucket keyword specific to Wasm.
const WASM_MEMORY_EXTRA: &str = "global";

pub fn scan(bytes: &[u8]) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let lower: Vec<u8> = bytes.iter().map(|b| b.to_ascii_lowercase()).collect();

    for set in KEYWORD_SETS {
        for kw in set.keywords {
            if contains_subslice(&lower, kw.as_bytes()) {
                outcome.capabilities.insert(set.capability);
                outcome.reasons.push(format!("wasm bytes matched '{kw}'"));
            }
        }
    }
    if contains_subslice(&lower, WASM_MEMORY_EXTRA.as_bytes()) {
        outcome.capabilities.insert(Capability::Memory);
        outcome
            .reasons
            .push(format!("wasm bytes matched '{WASM_MEMORY_EXTRA}'"));
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

    #[test]
    fn matches_global_for_memory() {
        let outcome = scan(b"(module (global $counter i32))");
        assert!(outcome.capabilities.contains(&Capability::Memory));
    }

    #[test]
    fn matches_perception_keyword() {
        let outcome = scan(b"(func $observe_input (param i32))");
        assert!(outcome.capabilities.contains(&Capability::Perception));
    }
}
