//! ELF capability scanner.
//!
//! Parses the symbol table and matches each symbol name (case-insensitive
//! substring) against the keyword lists, then separately scans every
//! section's raw bytes for AI-library substrings.

use super::ScanOutcome;
use crate::capability::{contains_ci, scan_bytes_for_ai_libraries, KEYWORD_SETS};
use object::{Object, ObjectSection, ObjectSymbol};

pub fn scan(bytes: &[u8]) -> Result<ScanOutcome, String> {
    let file = object::File::parse(bytes).map_err(|e| e.to_string())?;
    let mut outcome = ScanOutcome::default();

    for symbol in file.symbols() {
        let Ok(name) = symbol.name() else { continue };
        for set in KEYWORD_SETS {
            for kw in set.keywords {
                if contains_ci(name, kw) {
                    outcome.capabilities.insert(set.capability);
                    outcome
                        .reasons
                        .push(format!("ELF symbol '{name}' matched '{kw}'"));
                }
            }
        }
    }

    for section in file.sections() {
        if let Ok(data) = section.data() {
            scan_bytes_for_ai_libraries(data, false, &mut outcome.capabilities);
        }
    }

    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_elf_reports_parse_error() {
        let bytes = [0x7f, 0x45, 0x4c, 0x46, 0xff, 0xff];
        assert!(scan(&bytes).is_err());
    }
}
