//! Suggestion tree navigator.
//!
//! Walks a pre-parsed JSON tree segment by segment to find the node a
//! dotted path addresses. Used both for candidate lookup while typing and
//! for placeholder resolution in templates.

use serde_json::Value;

use super::path::{parse_index, split_path};

/// Navigate a suggestion tree following path segments.
///
/// Returns a borrowed reference to the addressed node, or None as soon as a
/// segment is missing or meets a leaf. There is no partial result.
///
/// # Shape rules
/// - Object nodes: the segment is a key, even when it looks numeric
/// - Array nodes: the segment must be a canonical decimal index within bounds
/// - Leaf nodes: any further segment misses
///
/// # Examples
/// ```
/// # use serde_json::json;
/// # use mentions::mention::resolve;
/// let tree = json!({"user": {"name": "Alice"}, "items": ["a", "b"]});
/// assert_eq!(resolve(&["user", "name"], &tree), Some(&json!("Alice")));
/// assert_eq!(resolve(&["items", "1"], &tree), Some(&json!("b")));
/// assert_eq!(resolve(&["user", "age"], &tree), None);
/// ```
pub fn resolve<'a, S: AsRef<str>>(path: &[S], tree: &'a Value) -> Option<&'a Value> {
    let mut current = tree;

    for segment in path {
        let segment = segment.as_ref();
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(arr) => arr.get(parse_index(segment)?)?,
            _ => return None,
        };
    }

    Some(current)
}

/// Resolve a dotted path string such as `user.address.city`.
///
/// Empty segments are dropped before resolution, so `user..name` addresses
/// the same node as `user.name`.
pub fn resolve_str<'a>(path: &str, tree: &'a Value) -> Option<&'a Value> {
    resolve(&split_path(path), tree)
}

/// Child keys of a container node in natural enumeration order.
///
/// Objects yield their keys in insertion order, arrays yield `"0".."len-1"`.
/// Leaves have no children.
pub fn child_keys(node: &Value) -> Option<Vec<String>> {
    match node {
        Value::Object(map) => Some(map.keys().cloned().collect()),
        Value::Array(arr) => Some((0..arr.len()).map(|i| i.to_string()).collect()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
