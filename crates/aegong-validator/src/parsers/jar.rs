//! Jar capability scanner.
//!
//! Enumerates archive entries and matches entry names against the
//! capability-class table (`Sensor.class`, `Action.class`, `Decision.class`,
//! `Memory.class`, `Agent.class`, ...). On archive-enumeration failure,
//! records the reason `could not enumerate archive` and falls back.

use super::ScanOutcome;
use crate::capability::contains_ci;
use crate::models::Capability;
use std::io::{Cursor, Read};

const CAPABILITY_CLASSES: &[(&str, Capability)] = &[
    ("sensor", Capability::Perception),
    ("perceive", Capability::Perception),
    ("action", Capability::Action),
    ("actuator", Capability::Action),
    ("decision", Capability::Reasoning),
    ("reasoner", Capability::Reasoning),
    ("memory", Capability::Memory),
    ("state", Capability::Memory),
    ("agent", Capability::AgentClass),
];

pub fn scan(bytes: &[u8]) -> Result<ScanOutcome, String> {
    let reader = Cursor::new(bytes);
    let mut archive = zip::ZipArchive::new(reader).map_err(|_| "could not enumerate archive".to_string())?;
    let mut outcome = ScanOutcome::default();

    for i in 0..archive.len() {
        let entry = archive
            .by_index(i)
            .map_err(|_| "could not enumerate archive".to_string())?;
        let name = entry.name().to_string();

        if let Some(class_name) = name.strip_suffix(".class") {
            for (keyword, capability) in CAPABILITY_CLASSES {
                if contains_ci(class_name, keyword) {
                    outcome.capabilities.insert(*capability);
                    outcome
                        .reasons
                        .push(format!("jar entry '{name}' matched class keyword '{keyword}'"));
                }
            }
        }
    }

    scan_manifest_for_ai_libraries(bytes, &mut outcome);
    Ok(outcome)
}

/// Jar's AiLibraries bucket also considers manifest/class file content, not
/// just entry names; a lightweight pass reads each entry's bytes and
/// substring-matches the AiLibraries keyword set.
fn scan_manifest_for_ai_libraries(bytes: &[u8], outcome: &mut ScanOutcome) {
    let reader = Cursor::new(bytes);
    let Ok(mut archive) = zip::ZipArchive::new(reader) else {
        return;
    };
    for i in 0..archive.len() {
        let Ok(mut entry) = archive.by_index(i) else {
            continue;
        };
        let mut buf = Vec::new();
        if entry.read_to_end(&mut buf).is_err() {
            continue;
        }
        if crate::capability::scan_bytes_for_ai_libraries(&buf, false, &mut outcome.capabilities) {
            outcome
                .reasons
                .push(format!("jar entry '{}' content matched an AI library", entry.name()));
        }
    }
}
