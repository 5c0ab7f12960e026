//! Heuristic shield: flags obfuscation-adjacent vocabulary, abnormally high
//! byte-distribution entropy, and repetition patterns that look synthetic
//! rather than naturally occurring.

use super::count_distinct_hits;
use crate::models::ShieldOutcome;
use aegong_sandbox::SandboxInfo;
use serde_json::json;
use std::collections::BTreeMap;

const SUSPICIOUS_PATTERNS: &[&str] = &[
    "obfuscation",
    "encryption",
    "encoding",
    "steganography",
    "polymorphic",
    "metamorphic",
    "packed",
    "compressed",
];

const SUSPICIOUS_HIT_THRESHOLD: usize = 3;
const ENTROPY_THRESHOLD: f64 = 7.5;
const ANOMALY_THRESHOLD: usize = 5;
const STRIDE: usize = 100;
const MIN_SIZE_FOR_STRIDE_CHECK: usize = 1000;
const IDENTICAL_RUN_THRESHOLD: usize = 1000;
const VALID_THRESHOLD: f64 = 0.6;

pub fn validate(bytes: &[u8], _sandbox: &SandboxInfo) -> ShieldOutcome {
    let suspicious_hits = count_distinct_hits(bytes, SUSPICIOUS_PATTERNS);
    let entropy = shannon_entropy(bytes);
    let anomalies = count_anomalies(bytes);

    let mut score = 1.0;
    if suspicious_hits > SUSPICIOUS_HIT_THRESHOLD {
        score -= 0.3;
    }
    if entropy > ENTROPY_THRESHOLD {
        score -= 0.3;
    }
    if anomalies > ANOMALY_THRESHOLD {
        score -= 0.4;
    }
    let score = score.max(0.0);

    let mut details = BTreeMap::new();
    details.insert("suspicious_hits".to_string(), json!(suspicious_hits));
    details.insert("entropy".to_string(), json!(entropy));
    details.insert("anomalies".to_string(), json!(anomalies));
    details.insert("score".to_string(), json!(score));

    ShieldOutcome::new("heuristic", score >= VALID_THRESHOLD, details)
}

fn shannon_entropy(bytes: &[u8]) -> f64 {
    if bytes.is_empty() {
        return 0.0;
    }
    let mut counts = [0u64; 256];
    for b in bytes {
        counts[*b as usize] += 1;
    }
    let len = bytes.len() as f64;
    counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| {
            let p = c as f64 / len;
            -p * p.log2()
        })
        .sum()
}

/// Counts repeated-100-byte-stride matches of the leading prefix, plus a
/// contribution for any run of identical bytes long enough to be
/// implausible in naturally-occurring content.
fn count_anomalies(bytes: &[u8]) -> usize {
    let mut anomalies = 0;

    if bytes.len() > MIN_SIZE_FOR_STRIDE_CHECK {
        let prefix = &bytes[..STRIDE];
        let stride_matches = bytes
            .chunks(STRIDE)
            .skip(1)
            .filter(|chunk| chunk.len() == STRIDE && *chunk == prefix)
            .count();
        if stride_matches > 3 {
            anomalies += stride_matches;
        }
    }

    if longest_identical_run(bytes) >= IDENTICAL_RUN_THRESHOLD {
        anomalies += 1;
    }

    anomalies
}

fn longest_identical_run(bytes: &[u8]) -> usize {
    let mut longest = 0;
    let mut current = 0;
    let mut last: Option<u8> = None;
    for &b in bytes {
        if Some(b) == last {
            current += 1;
        } else {
            current = 1;
            last = Some(b);
        }
        longest = longest.max(current);
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use aegong_sandbox::SandboxRegistry;

    #[test]
    fn clean_artifact_is_valid() {
        let registry = SandboxRegistry::new();
        let sandbox = registry.create("deadbeefcafebabe", false).unwrap();
        let outcome = validate(b"a perfectly ordinary artifact", &sandbox.info);
        assert!(outcome.valid);
    }

    #[test]
    fn long_identical_run_counts_as_an_anomaly() {
        let bytes = vec![0x41u8; 2000];
        assert!(count_anomalies(&bytes) >= 1);
    }

    #[test]
    fn entropy_of_uniform_bytes_is_zero() {
        assert_eq!(shannon_entropy(&[0x41, 0x41, 0x41]), 0.0);
    }

    #[test]
    fn many_suspicious_keywords_drop_score() {
        let registry = SandboxRegistry::new();
        let sandbox = registry.create("deadbeefcafebabe", false).unwrap();
        let text = b"obfuscation encryption encoding steganography polymorphic";
        let outcome = validate(text, &sandbox.info);
        assert!(outcome.details.get("suspicious_hits").unwrap().as_u64().unwrap() > SUSPICIOUS_HIT_THRESHOLD as u64);
    }
}
