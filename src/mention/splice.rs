//! Candidate insertion.
//!
//! Replaces the trigger span with the full accepted path, preserving the
//! text before the trigger and after the caret byte for byte.

use super::mention_config::MentionConfig;
use super::path::{SEPARATOR, join_path};
use super::scanner::{TriggerSpan, clamp_offset};

/// Text and caret after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditResult {
    pub text: String,
    pub caret_offset: usize,
}

/// Build the token written back for an accepted candidate.
///
/// `trigger + parent.path. + candidate`, e.g. `@users.name`.
pub fn inserted_token(trigger: &str, parent_path: &[String], candidate: &str) -> String {
    let mut token = String::from(trigger);
    if !parent_path.is_empty() {
        token.push_str(&join_path(parent_path));
        token.push(SEPARATOR);
    }
    token.push_str(candidate);
    token
}

/// Replace `[start, end)` with `insert_text`, keeping text before and after.
fn replace_range(text: &str, start: usize, end: usize, insert_text: &str) -> EditResult {
    let new_text = format!("{}{}{}", &text[..start], insert_text, &text[end..]);
    EditResult {
        text: new_text,
        caret_offset: start + insert_text.len(),
    }
}

/// Splice an accepted candidate into the text.
///
/// The span is replaced from its trigger marker through the caret it was
/// scanned at. Nothing is appended after the candidate; see
/// [`accept_with_config`] for caller-configured suffixes.
pub fn accept(
    text: &str,
    span: &TriggerSpan,
    trigger: &str,
    parent_path: &[String],
    candidate: &str,
) -> EditResult {
    accept_with_suffix(text, span, trigger, parent_path, candidate, "")
}

/// Splice an accepted candidate followed by `suffix`.
///
/// The caret lands after the suffix.
pub fn accept_with_suffix(
    text: &str,
    span: &TriggerSpan,
    trigger: &str,
    parent_path: &[String],
    candidate: &str,
    suffix: &str,
) -> EditResult {
    // A stale span may point past the current text
    let start = clamp_offset(text, span.start_offset);
    let end = clamp_offset(text, span.end_offset(trigger)).max(start);

    let mut insert_text = inserted_token(trigger, parent_path, candidate);
    insert_text.push_str(suffix);

    replace_range(text, start, end, &insert_text)
}

/// Splice an accepted candidate using the suffix policy of `config`.
pub fn accept_with_config(
    text: &str,
    span: &TriggerSpan,
    parent_path: &[String],
    candidate: &str,
    config: &MentionConfig,
) -> EditResult {
    accept_with_suffix(
        text,
        span,
        config.trigger(),
        parent_path,
        candidate,
        &config.accept_suffix(),
    )
}

#[cfg(test)]
#[path = "splice_tests.rs"]
mod splice_tests;
