//! Script capability scanner.
//!
//! Decodes as UTF-8 (lossy) and looks for language-idiomatic declarations
//! (`def <kw>`, `function <kw>`, `class <KwClass>`, framework imports),
//! plus autonomy patterns (`while True`, `setInterval`, ...).

use super::ScanOutcome;
use crate::capability::{contains_ci, AUTONOMY_PATTERNS, KEYWORD_SETS};
use crate::models::Capability;

const DECLARATION_PREFIXES: &[&str] = &["def ", "function ", "class "];
const IMPORT_PREFIXES: &[&str] = &["import ", "from ", "require "];

pub fn scan(bytes: &[u8]) -> ScanOutcome {
    let text = String::from_utf8_lossy(bytes);
    let mut outcome = ScanOutcome::default();

    for line in text.lines() {
        let trimmed = line.trim_start();

        for prefix in DECLARATION_PREFIXES {
            if let Some(rest) = trimmed.strip_prefix(prefix) {
                match_declaration(rest, prefix, &mut outcome);
            }
        }

        for prefix in IMPORT_PREFIXES {
            if trimmed.starts_with(prefix) {
                match_import(trimmed, &mut outcome);
            }
        }
    }

    let lower = text.to_ascii_lowercase();
    for pattern in AUTONOMY_PATTERNS {
        if lower.contains(pattern) {
            outcome.autonomy_detected = true;
            outcome.capabilities.insert(Capability::Autonomy);
            outcome
                .reasons
                .push(format!("autonomy pattern '{pattern}' detected"));
        }
    }

    outcome
}

fn match_declaration(identifier_and_rest: &str, prefix: &str, outcome: &mut ScanOutcome) {
    let identifier: String = identifier_and_rest
        .chars()
        .take_while(|c| c.is_alphanumeric() || *c == '_')
        .collect();
    if identifier.is_empty() {
        return;
    }

    if prefix.trim() == "class" && contains_ci(&identifier, "agent") {
        outcome.capabilities.insert(Capability::AgentClass);
        outcome
            .reasons
            .push(format!("class declaration '{identifier}' names an agent"));
    }

    for set in KEYWORD_SETS {
        for kw in set.keywords {
            if contains_ci(&identifier, kw) {
                outcome.capabilities.insert(set.capability);
                outcome.reasons.push(format!(
                    "{}declaration '{identifier}' matched '{kw}'",
                    prefix.trim_end().to_string() + " "
                ));
            }
        }
    }
}

fn match_import(line: &str, outcome: &mut ScanOutcome) {
    for set in KEYWORD_SETS {
        if set.capability != Capability::AiLibraries {
            continue;
        }
        for kw in set.keywords {
            if contains_ci(line, kw) {
                outcome.capabilities.insert(Capability::AiLibraries);
                outcome
                    .reasons
                    .push(format!("import line matched framework '{kw}'"));
            }
        }
    }
}
