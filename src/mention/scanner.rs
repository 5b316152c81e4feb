//! Trigger scanning.
//!
//! Finds the trigger marker the caret is currently completing. Only text
//! before the caret is inspected; whatever follows the caret belongs to the
//! surrounding sentence and never affects the result.

use memchr::memmem;

/// A trigger occurrence located before the caret.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriggerSpan {
    /// Byte offset of the first character of the trigger marker
    pub start_offset: usize,
    /// Text between the end of the trigger marker and the caret
    pub raw_content: String,
    /// A closing marker already appears between the trigger and the caret
    pub is_closed: bool,
}

impl TriggerSpan {
    /// Open, and still a single run of non-whitespace characters.
    pub fn is_active(&self) -> bool {
        !self.is_closed && !self.raw_content.chars().any(char::is_whitespace)
    }

    /// Byte offset just past the raw content, i.e. the caret it was scanned at.
    pub fn end_offset(&self, trigger: &str) -> usize {
        self.start_offset + trigger.len() + self.raw_content.len()
    }
}

/// Clamp a caller-supplied caret to a valid position in `text`.
///
/// Offsets past the end snap to the end; offsets inside a multi-byte
/// character snap back to that character's start.
pub fn clamp_offset(text: &str, offset: usize) -> usize {
    let mut offset = offset.min(text.len());
    while !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

/// Locate the closest trigger occurrence ending at or before the caret.
///
/// Unlike [`scan`], this also returns spans that are closed or contain
/// whitespace, flagged accordingly.
pub fn find_span(
    text: &str,
    caret: usize,
    trigger: &str,
    closing: Option<&str>,
) -> Option<TriggerSpan> {
    if trigger.is_empty() {
        return None;
    }

    let caret = clamp_offset(text, caret);
    let before_caret = &text[..caret];
    let start_offset = memmem::rfind(before_caret.as_bytes(), trigger.as_bytes())?;
    let raw_content = &before_caret[start_offset + trigger.len()..];

    let is_closed = closing
        .filter(|c| !c.is_empty())
        .is_some_and(|c| memmem::find(raw_content.as_bytes(), c.as_bytes()).is_some());

    Some(TriggerSpan {
        start_offset,
        raw_content: raw_content.to_string(),
        is_closed,
    })
}

/// Find the active trigger span at the caret, if any.
///
/// Returns None when no trigger precedes the caret, when a closing marker
/// already closed it, or when whitespace was typed after it.
pub fn scan(
    text: &str,
    caret: usize,
    trigger: &str,
    closing: Option<&str>,
) -> Option<TriggerSpan> {
    let span = find_span(text, caret, trigger, closing)?;

    if !span.is_active() {
        log::trace!(
            "trigger at {} inactive (closed: {})",
            span.start_offset,
            span.is_closed
        );
        return None;
    }

    Some(span)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod scanner_tests;
