//! Dotted path tokenization.
//!
//! Splits text like `user.address.ci` into completed segments and the
//! trailing segment still being typed. Empty segments produced by leading,
//! trailing or doubled dots are dropped silently.

/// Separator between path segments.
pub const SEPARATOR: char = '.';

/// Result of parsing the in-progress text of a trigger span.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedPath {
    /// Completed, non-empty segments before the last separator
    pub parent: Vec<String>,
    /// Segment being typed (empty if the text ends with a separator)
    pub partial: String,
}

impl ParsedPath {
    pub fn new(parent: Vec<String>, partial: String) -> Self {
        Self { parent, partial }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Split a complete dotted path into its non-empty segments.
///
/// # Examples
/// ```text
/// split_path("user.name")   → ["user", "name"]
/// split_path(".a..b.")      → ["a", "b"]
/// split_path("")            → []
/// ```
pub fn split_path(raw: &str) -> Vec<String> {
    raw.split(SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse in-progress path text into parent segments and the partial segment.
///
/// # Examples
/// ```text
/// parse_path("user.prof")  → parent: ["user"], partial: "prof"
/// parse_path("user.")      → parent: ["user"], partial: ""
/// parse_path("a..b")       → parent: ["a"],    partial: "b"
/// parse_path("")           → parent: [],       partial: ""
/// ```
pub fn parse_path(raw: &str) -> ParsedPath {
    if raw.is_empty() {
        return ParsedPath::empty();
    }

    match raw.rsplit_once(SEPARATOR) {
        Some((head, partial)) => ParsedPath::new(split_path(head), partial.to_string()),
        None => ParsedPath::new(Vec::new(), raw.to_string()),
    }
}

/// Join segments back into dotted form.
pub fn join_path<S: AsRef<str>>(segments: &[S]) -> String {
    let mut joined = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            joined.push(SEPARATOR);
        }
        joined.push_str(segment.as_ref());
    }
    joined
}

/// Interpret a segment as an array index.
///
/// Only canonical decimal forms are accepted: `"0"`, `"7"`, `"12"`.
/// Leading zeros, signs and whitespace are rejected so that each index has
/// exactly one spelling.
pub fn parse_index(segment: &str) -> Option<usize> {
    let bytes = segment.as_bytes();
    if bytes.is_empty() || !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    if bytes.len() > 1 && bytes[0] == b'0' {
        return None;
    }
    segment.parse().ok()
}

#[cfg(test)]
#[path = "path_tests.rs"]
mod path_tests;
