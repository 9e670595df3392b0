//! Copy-on-write object operations.

use serde_json::{Map, Value};

/// Shallow copy.
pub fn clone(source: &Map<String, Value>) -> Map<String, Value> {
    source.clone()
}

/// Merges `extra` over a copy of `source`; keys in `extra` win.
pub fn add(source: &Map<String, Value>, extra: &Map<String, Value>) -> Map<String, Value> {
    let mut out = source.clone();
    out.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    out
}

/// Copy of `source` without any key present in `keys`. Values in `keys` are
/// ignored.
pub fn remove(source: &Map<String, Value>, keys: &Map<String, Value>) -> Map<String, Value> {
    source
        .iter()
        .filter(|(k, _)| !keys.contains_key(k.as_str()))
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect()
}
