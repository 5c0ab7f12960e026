//! Mach-O capability scanner.
//!
//! Parses load commands for AI-library names and the symbol table for
//! capability keywords. Load-command dylib names are exposed by the
//! `object` crate's generic import table, so imported library names stand
//! in for the textual load-command form without needing a bespoke Mach-O
//! load-command walker.

use super::ScanOutcome;
use crate::capability::{contains_ci, scan_bytes_for_ai_libraries, KEYWORD_SETS};
use object::{Object, ObjectSymbol};

pub fn scan(bytes: &[u8]) -> Result<ScanOutcome, String> {
    let file = object::File::parse(bytes).map_err(|e| e.to_string())?;
    let mut outcome = ScanOutcome::default();

    if let Ok(imports) = file.imports() {
        for import in imports {
            let lib_text = String::from_utf8_lossy(import.library()).to_string();
            let name_text = String::from_utf8_lossy(import.name()).to_string();
            let combined = format!("{lib_text} {name_text}");
            // PE/MachO's AiLibraries bucket also picks up `cuda`.
            scan_bytes_for_ai_libraries(combined.as_bytes(), true, &mut outcome.capabilities);
        }
    }

    for symbol in file.symbols() {
        let Ok(name) = symbol.name() else { continue };
        for set in KEYWORD_SETS {
            for kw in set.keywords {
                if contains_ci(name, kw) {
                    outcome.capabilities.insert(set.capability);
                    outcome
                        .reasons
                        .push(format!("Mach-O symbol '{name}' matched '{kw}'"));
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
    fn malformed_macho_reports_parse_error() {
        let bytes = [0xfe, 0xed, 0xfa, 0xce, 0x00, 0x00];
        assert!(scan(&bytes).is_err());
    }
}
