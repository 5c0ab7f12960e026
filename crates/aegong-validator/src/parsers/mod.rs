//! Per-format capability scanners.
//!
//! Each scanner takes raw bytes and returns a [`ScanOutcome`] or an error
//! string describing why structural parsing failed; a parse failure is
//! recorded as a reason for the caller to fall back on, never raised.

pub mod elf;
pub mod generic;
pub mod jar;
pub mod macho;
pub mod pe;
pub mod script;
pub mod wasm;

use crate::models::Capability;
use std::collections::BTreeSet;

/// The result of scanning one artifact for capabilities.
#[derive(Debug, Default, Clone)]
pub struct ScanOutcome {
    pub capabilities: BTreeSet<Capability>,
    /// Ordered explanation strings (e.g. "matched keyword 'sense' in symbol
    /// 'sense_input'"), appended in match order.
    pub reasons: Vec<String>,
    /// True when an autonomy pattern was found (scripts only).
    pub autonomy_detected: bool,
}

impl ScanOutcome {
    pub fn merge(&mut self, other: ScanOutcome) {
        self.capabilities.extend(other.capabilities);
        self.reasons.extend(other.reasons);
        self.autonomy_detected |= other.autonomy_detected;
    }
}
