//! Candidate filtering for the path segment under the caret.

use serde_json::Value;

use super::navigator::{child_keys, resolve};
use super::path::parse_path;

/// Candidates for an in-progress path, with the parsed path they came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterResult {
    /// Matching keys or indices in the node's natural order
    pub candidates: Vec<String>,
    /// Completed segments addressing the node the candidates came from
    pub parent_path: Vec<String>,
    /// Segment being completed
    pub incomplete_segment: String,
}

/// Compute completions for the raw text typed after a trigger.
///
/// The last segment of `raw_content` is matched as a prefix against the
/// children of the node its parent segments address. Order follows the node
/// (insertion order for objects, ascending for arrays) and is never sorted.
pub fn filter(raw_content: &str, tree: &Value, case_sensitive: bool) -> FilterResult {
    let parsed = parse_path(raw_content);

    let candidates = resolve(&parsed.parent, tree)
        .and_then(child_keys)
        .map(|keys| {
            keys.into_iter()
                .filter(|key| matches_prefix(key, &parsed.partial, case_sensitive))
                .collect()
        })
        .unwrap_or_default();

    FilterResult {
        candidates,
        parent_path: parsed.parent,
        incomplete_segment: parsed.partial,
    }
}

/// Prefix test used for candidate filtering. An empty prefix matches all.
pub fn matches_prefix(candidate: &str, prefix: &str, case_sensitive: bool) -> bool {
    if prefix.is_empty() {
        return true;
    }
    if case_sensitive {
        candidate.starts_with(prefix)
    } else {
        candidate.to_lowercase().starts_with(&prefix.to_lowercase())
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;
