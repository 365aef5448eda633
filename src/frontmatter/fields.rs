//! Lenient readers over a decoded frontmatter mapping.
//!
//! A field with the wrong shape reads as absent.

use serde_yaml::{Mapping, Value};
use std::collections::BTreeMap;

/// Trimmed scalar value, `None` when absent, empty, or not a scalar.
///
/// Numbers and booleans are stringified, so `name: 123` reads as `"123"`.
pub fn string(fields: &Mapping, key: &str) -> Option<String> {
    let value = scalar_to_string(fields.get(key)?)?;
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub fn uint(fields: &Mapping, key: &str) -> Option<u32> {
    fields
        .get(key)?
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
}

pub fn flag(fields: &Mapping, key: &str) -> Option<bool> {
    fields.get(key)?.as_bool()
}

/// Token list given either as a whitespace-delimited string or a sequence.
///
/// Sequence items that are not strings are dropped. Any other shape yields an
/// empty list.
pub fn token_list(fields: &Mapping, key: &str) -> Vec<String> {
    match fields.get(key) {
        Some(Value::String(s)) => s.split_whitespace().map(str::to_string).collect(),
        Some(Value::Sequence(items)) => items
            .iter()
            .filter_map(Value::as_str)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}

/// Flat string map; scalar values are stringified, nested values dropped.
pub fn string_map(fields: &Mapping, key: &str) -> BTreeMap<String, String> {
    let Some(Value::Mapping(map)) = fields.get(key) else {
        return BTreeMap::new();
    };
    map.iter()
        .filter_map(|(k, v)| Some((scalar_to_string(k)?, scalar_to_string(v)?)))
        .collect()
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
