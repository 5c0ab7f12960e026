//! The append-only log's record shape: a report's fields plus the
//! signature computed over their canonical JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One immutable audit-log line.
///
/// `fields` holds every field of the audited report except `signature`
/// itself; `signature` is `hex(SHA-256(canonical_json(fields)))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(flatten)]
    pub fields: Map<String, Value>,
    pub signature: String,
}

impl LogEntry {
    /// Recomputes the signature over `fields` and compares against the
    /// stored one. Used by readers verifying the log hasn't been tampered
    /// with; the writer itself never needs to call this.
    pub fn verify(&self) -> bool {
        crate::signature::sign(&Value::Object(self.fields.clone())) == self.signature
    }
}
