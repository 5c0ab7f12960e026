//! RFC 8785-style JSON canonicalization: object keys sorted by UTF-16 code
//! unit, numbers in minimal form, minimally-escaped strings, no
//! insignificant whitespace. This is the "canonical JSON" the signature in
//! each log line is computed over.

pub fn canonicalize(value: &serde_json::Value) -> String {
    canonicalize_value(value)
}

fn canonicalize_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Number(n) => canonicalize_number(n),
        serde_json::Value::String(s) => canonicalize_string(s),
        serde_json::Value::Array(arr) => canonicalize_array(arr),
        serde_json::Value::Object(obj) => canonicalize_object(obj),
    }
}

fn canonicalize_number(n: &serde_json::Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    match n.as_f64() {
        Some(f) if f.fract() == 0.0 && f.abs() < (i64::MAX as f64) => (f as i64).to_string(),
        Some(f) => format!("{f}"),
        None => n.to_string(),
    }
}

fn canonicalize_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 2);
    result.push('"');
    for ch in s.chars() {
        match ch {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\x08' => result.push_str("\\b"),
            '\x0C' => result.push_str("\\f"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c < '\x20' => result.push_str(&format!("\\u{:04x}", c as u32)),
            c => result.push(c),
        }
    }
    result.push('"');
    result
}

fn canonicalize_array(arr: &[serde_json::Value]) -> String {
    let elements: Vec<String> = arr.iter().map(canonicalize_value).collect();
    format!("[{}]", elements.join(","))
}

fn canonicalize_object(obj: &serde_json::Map<String, serde_json::Value>) -> String {
    let mut entries: Vec<(&String, &serde_json::Value)> = obj.iter().collect();
    entries.sort_by(|(a, _), (b, _)| compare_utf16(a, b));
    let pairs: Vec<String> = entries
        .iter()
        .map(|(k, v)| format!("{}:{}", canonicalize_string(k), canonicalize_value(v)))
        .collect();
    format!("{{{}}}", pairs.join(","))
}

fn compare_utf16(a: &str, b: &str) -> std::cmp::Ordering {
    a.encode_utf16().cmp(b.encode_utf16())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn sorts_object_keys() {
        let value = json!({"zulu": true, "alpha": [3, 2, 1], "bravo": "test"});
        assert_eq!(canonicalize(&value), r#"{"alpha":[3,2,1],"bravo":"test","zulu":true}"#);
    }

    #[test]
    fn key_order_is_irrelevant_to_output() {
        let a = json!({"b": 1, "a": 2});
        let b = json!({"a": 2, "b": 1});
        assert_eq!(canonicalize(&a), canonicalize(&b));
    }

    #[test]
    fn nested_objects_are_canonicalized_recursively() {
        let value = json!({"outer": {"z": 1, "a": 2}});
        assert_eq!(canonicalize(&value), r#"{"outer":{"a":2,"z":1}}"#);
    }
}
