//! Shield data model: each of the six orthogonal validators reports a
//! boolean verdict plus a details map explaining how it got there.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One shield's verdict for a single artifact+sandbox pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShieldOutcome {
    pub name: String,
    pub valid: bool,
    pub details: BTreeMap<String, serde_json::Value>,
}

impl ShieldOutcome {
    pub fn new(name: impl Into<String>, valid: bool, details: BTreeMap<String, serde_json::Value>) -> Self {
        Self {
            name: name.into(),
            valid,
            details,
        }
    }
}
