//! Response Shape Normalization
//!
//! Collection endpoints answer either with a bare JSON array or with a
//! paginated envelope `{ "results": [...] }`.

use serde_json::Value;

/// Envelope field holding the records
pub const RESULTS_FIELD: &str = "results";

/// Pull the record list out of a response body.
///
/// Anything that is neither an array nor an envelope around an array
/// yields an empty list.
pub fn extract_collection(body: Value) -> Vec<Value> {
    match body {
        Value::Array(items) => items,
        Value::Object(mut map) => match map.remove(RESULTS_FIELD) {
            Some(Value::Array(items)) => items,
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bare_and_envelope_match() {
        let records = json!([{"id": 1, "name": "Ada"}, {"id": 2, "name": "Bo"}]);
        let wrapped = json!({"count": 2, "next": null, "results": records.clone()});

        assert_eq!(extract_collection(records), extract_collection(wrapped));
    }

    #[test]
    fn test_object_without_results_is_empty() {
        assert!(extract_collection(json!({"detail": "Not found."})).is_empty());
    }

    #[test]
    fn test_non_array_results_is_empty() {
        assert!(extract_collection(json!({"results": null})).is_empty());
        assert!(extract_collection(json!({"results": {"id": 1}})).is_empty());
    }

    #[test]
    fn test_scalars_are_empty() {
        assert!(extract_collection(json!(null)).is_empty());
        assert!(extract_collection(json!("oops")).is_empty());
        assert!(extract_collection(json!(42)).is_empty());
    }

    #[test]
    fn test_order_preserved() {
        let items = extract_collection(json!({"results": [{"id": 3}, {"id": 1}, {"id": 2}]}));
        let ids: Vec<_> = items.iter().filter_map(|v| v["id"].as_u64()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}
