//! Signing primitive: `hex(SHA-256(canonical_json(value)))`.

use crate::canonicalize::canonicalize;
use sha2::{Digest, Sha256};

pub fn sign(value: &serde_json::Value) -> String {
    let canonical = canonicalize(value);
    let digest = Sha256::digest(canonical.as_bytes());
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn deterministic_for_equivalent_objects() {
        let a = json!({"b": 1, "a": 2});
        let b = json!({"a": 2, "b": 1});
        assert_eq!(sign(&a), sign(&b));
    }

    #[test]
    fn produces_64_hex_chars() {
        let sig = sign(&json!({"x": 1}));
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
