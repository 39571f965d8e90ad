//! JSON utility functions for reading grid nodes.
//!
//! Grid JSON is loosely typed: optional fields may be missing, null or of an
//! unexpected type. These accessors treat all of those the same way.

use std::collections::BTreeMap;

use serde_json::{Map, Value};

/// Get a string property.
///
/// Returns `None` if the property is missing or not a string.
///
/// # Examples
/// ```
/// use griddata::json::get_string;
/// use serde_json::json;
///
/// let node = json!({ "id": "abc", "grid": 12 });
/// let obj = node.as_object().unwrap();
/// assert_eq!(get_string(obj, "id"), Some("abc"));
/// assert_eq!(get_string(obj, "grid"), None);
/// ```
pub fn get_string<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

/// Get a string property, converting numbers and booleans to text.
pub fn get_text(obj: &Map<String, Value>, key: &str) -> Option<String> {
    match obj.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Get an integer property.
///
/// Numeric strings are accepted as well, since some editors store numbers as text.
pub fn get_i64(obj: &Map<String, Value>, key: &str) -> Option<i64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Get a float property.
pub fn get_f64(obj: &Map<String, Value>, key: &str) -> Option<f64> {
    match obj.get(key)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Get a boolean property, defaulting to `false`.
pub fn get_bool(obj: &Map<String, Value>, key: &str) -> bool {
    match obj.get(key) {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Get an object property.
pub fn get_object<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Map<String, Value>> {
    obj.get(key).and_then(Value::as_object)
}

/// Get an array property.
///
/// A missing or non-array property yields an empty slice.
///
/// # Examples
/// ```
/// use griddata::json::get_array;
/// use serde_json::json;
///
/// let node = json!({ "rows": [1, 2], "areas": "oops" });
/// let obj = node.as_object().unwrap();
/// assert_eq!(get_array(obj, "rows").len(), 2);
/// assert!(get_array(obj, "areas").is_empty());
/// assert!(get_array(obj, "controls").is_empty());
/// ```
pub fn get_array<'a>(obj: &'a Map<String, Value>, key: &str) -> &'a [Value] {
    obj.get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Get an array of strings, skipping non-string items.
pub fn get_string_array(obj: &Map<String, Value>, key: &str) -> Vec<String> {
    get_array(obj, key)
        .iter()
        .filter_map(Value::as_str)
        .map(String::from)
        .collect()
}

/// Get a flat string dictionary such as a row's `config` or `styles`.
///
/// Scalar values are converted to text; nested objects, arrays and nulls are skipped.
pub fn get_dictionary(obj: &Map<String, Value>, key: &str) -> BTreeMap<String, String> {
    let Some(map) = get_object(obj, key) else {
        return BTreeMap::new();
    };

    map.keys()
        .filter_map(|k| get_text(map, k).map(|v| (k.clone(), v)))
        .collect()
}

/// Check whether a token carries no data.
///
/// Null, empty strings, empty arrays and empty objects are empty.
pub fn is_empty_token(token: &Value) -> bool {
    match token {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

/// Build the path of an indexed child node, e.g. `sections[0].rows[2]`.
pub fn child_path(parent: &str, key: &str, index: usize) -> String {
    if parent.is_empty() {
        format!("{key}[{index}]")
    } else {
        format!("{parent}.{key}[{index}]")
    }
}
