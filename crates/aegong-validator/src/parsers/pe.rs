//! PE capability scanner.
//!
//! Parses sections, scanning `.idata`/import sections for AI-library
//! substrings and `.edata`/export sections for capability keywords.
//!
//! The validator treats section-scan capabilities as authoritative: the
//! string-content fallback is only consulted when this scan's capability
//! set comes back empty.

use super::ScanOutcome;
use crate::capability::{contains_ci, scan_bytes_for_ai_libraries, KEYWORD_SETS};
use object::{Object, ObjectSection};

const IMPORT_SECTIONS: &[&str] = &[".idata"];
const EXPORT_SECTIONS: &[&str] = &[".edata"];

pub fn scan(bytes: &[u8]) -> Result<ScanOutcome, String> {
    let file = object::File::parse(bytes).map_err(|e| e.to_string())?;
    let mut outcome = ScanOutcome::default();

    for section in file.sections() {
        let Ok(name) = section.name() else { continue };
        let Ok(data) = section.data() else { continue };

        if IMPORT_SECTIONS.contains(&name) {
            // PE's AiLibraries bucket also picks up `cuda`.
            scan_bytes_for_ai_libraries(data, true, &mut outcome.capabilities);
            outcome
                .reasons
                .push(format!("scanned import section '{name}' for AI libraries"));
        }

        if EXPORT_SECTIONS.contains(&name) {
            let text = String::from_utf8_lossy(data);
            for set in KEYWORD_SETS {
                for kw in set.keywords {
                    if contains_ci(&text, kw) {
                        outcome.capabilities.insert(set.capability);
                        outcome
                            .reasons
                            .push(format!("export section '{name}' matched '{kw}'"));
                    }
                }
            }
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_pe_reports_parse_error() {
        let bytes = [0x4d, 0x5a, 0x00, 0x00];
        assert!(scan(&bytes).is_err());
    }
}
