//! Top-level keys of a JSON request body.

use serde_json::Value;

/// Returns the top-level keys of a JSON object body.
///
/// Partial updates use this to know which columns the client actually sent.
/// Anything that is not a JSON object yields no keys. The list route has no
/// body, so only update handlers of the embedding application call this.
pub fn input_keys(body: &[u8]) -> Vec<String> {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map.keys().cloned().collect(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_keys() {
        let mut keys = input_keys(br#"{"name": "Ann", "score": 3, "profile": {"age": 4}}"#);
        keys.sort();
        assert_eq!(keys, vec!["name", "profile", "score"]);
    }

    #[test]
    fn test_non_object() {
        assert!(input_keys(b"[1, 2]").is_empty());
        assert!(input_keys(b"not json").is_empty());
        assert!(input_keys(b"").is_empty());
    }
}
