//! Capability keyword vocabulary.

use crate::models::Capability;

/// A keyword list paired with the capability it signals.
pub struct KeywordSet {
    pub capability: Capability,
    pub keywords: &'static [&'static str],
}

/// The capability keyword tables, case-insensitive substring match.
///
/// `extra_for_wasm`/`extra_for_pe_macho` hold the format-specific additions
/// (`global` for Wasm's Memory bucket, `cuda` for PE/MachO's AiLibraries
/// bucket) and are folded in by the caller rather than baked into this
/// base table, so the table stays a single source of truth across formats.
pub const KEYWORD_SETS: &[KeywordSet] = &[
    KeywordSet {
        capability: Capability::Perception,
        keywords: &["sense", "input", "receive", "observe", "perceive", "get"],
    },
    KeywordSet {
        capability: Capability::Action,
        keywords: &["act", "output", "send", "respond", "execute", "set"],
    },
    KeywordSet {
        capability: Capability::Reasoning,
        keywords: &["decide", "reason", "think", "process", "analyze", "evaluate"],
    },
    KeywordSet {
        capability: Capability::Memory,
        keywords: &["memory", "state", "store", "remember", "history"],
    },
    KeywordSet {
        capability: Capability::AiLibraries,
        keywords: &[
            "tensorflow", "pytorch", "onnx", "keras", "scikit", "ml", "ai", "neural",
        ],
    },
];

/// Autonomy patterns, checked independently of the keyword-set table since
/// they are phrase-shaped rather than single-word (scripts only).
pub const AUTONOMY_PATTERNS: &[&str] = &[
    "while true",
    "while(true)",
    "setinterval",
    "settimeout",
    "schedule.every",
    "event loop",
    "main loop",
    "run forever",
    "daemon",
];

/// Returns true if `haystack` (already expected lowercase-normalized by the
/// caller for binary scans, or raw for UTF-8 script scans matched
/// case-insensitively here) contains `needle` as a substring, ignoring case.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}

/// Scans a single string (symbol name, section text, decoded script, etc.)
/// against every keyword set, inserting matched capabilities into `out`.
/// Returns the matched keyword for any hit in `reasons` via the supplied
/// closure, so callers can build ordered explanation strings.
pub fn scan_text_for_capabilities(
    text: &str,
    out: &mut std::collections::BTreeSet<Capability>,
    mut on_match: impl FnMut(Capability, &str),
) {
    let lower = text.to_ascii_lowercase();
    for set in KEYWORD_SETS {
        for kw in set.keywords {
            if lower.contains(kw) {
                out.insert(set.capability);
                on_match(set.capability, kw);
            }
        }
    }
}

/// Scans raw bytes (interpreted as Latin-1/ASCII text) for the AiLibraries
/// keyword set only, optionally including the `cuda` keyword used by the
/// PE/MachO import/export scanners.
pub fn scan_bytes_for_ai_libraries(
    bytes: &[u8],
    include_cuda: bool,
    out: &mut std::collections::BTreeSet<Capability>,
) -> bool {
    let lower: Vec<u8> = bytes.iter().map(|b| b.to_ascii_lowercase()).collect();
    let mut matched = false;
    let mut keywords: Vec<&str> = KEYWORD_SETS
        .iter()
        .find(|s| s.capability == Capability::AiLibraries)
        .map(|s| s.keywords.to_vec())
        .unwrap_or_default();
    if include_cuda {
        keywords.push("cuda");
    }
    for kw in keywords {
        if contains_subslice(&lower, kw.as_bytes()) {
            out.insert(Capability::AiLibraries);
            matched = true;
        }
    }
    matched
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
    use std::collections::BTreeSet;

    #[test]
    fn scans_multiple_capabilities() {
        let mut caps = BTreeSet::new();
        scan_text_for_capabilities("def sense(x): pass\ndef act(y): pass", &mut caps, |_, _| {});
        assert!(caps.contains(&Capability::Perception));
        assert!(caps.contains(&Capability::Action));
    }

    #[test]
    fn case_insensitive() {
        let mut caps = BTreeSet::new();
        scan_text_for_capabilities("DECIDE now", &mut caps, |_, _| {});
        assert!(caps.contains(&Capability::Reasoning));
    }

    #[test]
    fn ai_library_byte_scan() {
        let mut caps = BTreeSet::new();
        let found = scan_bytes_for_ai_libraries(b"uses TensorFlow internally", false, &mut caps);
        assert!(found);
        assert!(caps.contains(&Capability::AiLibraries));
    }

    #[test]
    fn cuda_only_matches_when_included() {
        let mut caps = BTreeSet::new();
        let found = scan_bytes_for_ai_libraries(b"links against cuda runtime", false, &mut caps);
        assert!(!found);
        let found = scan_bytes_for_ai_libraries(b"links against cuda runtime", true, &mut caps);
        assert!(found);
    }
}
