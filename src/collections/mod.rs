//! Immutable collection helpers for test fixtures.
//!
//! Lists are slices of [`serde_json::Value`], objects are [`serde_json::Map`].
//! Nothing here mutates its inputs; every "modifying" helper returns a new
//! collection.

use serde_json::{Map, Value};

pub mod array;
pub mod object;

/// Index of the first item sharing at least one key/value pair with
/// `pattern`. Items that are not objects never match, nor does an empty
/// pattern.
pub fn find_index(list: &[Value], pattern: &Map<String, Value>) -> Option<usize> {
    list.iter().position(|item| {
        pattern
            .iter()
            .any(|(key, expected)| item.get(key) == Some(expected))
    })
}

/// Owned copy of the item [`find_index`] locates.
pub fn find(list: &[Value], pattern: &Map<String, Value>) -> Option<Value> {
    find_index(list, pattern).map(|index| list[index].clone())
}
