//! Per-widget suggestion state.
//!
//! The engine functions are stateless; a text widget still needs to remember
//! which candidates are showing, which one is highlighted and which span an
//! acceptance should replace. `MentionSession` holds exactly that and
//! re-derives everything from scratch on each text change.

use serde_json::Value;

use super::filter::filter;
use super::mention_config::MentionConfig;
use super::scanner::{TriggerSpan, clamp_offset, scan};
use super::splice::{EditResult, accept_with_config};

#[derive(Debug, Clone, Default)]
pub struct MentionSession {
    config: MentionConfig,
    candidates: Vec<String>,
    selected_index: usize,
    parent_path: Vec<String>,
    span: Option<TriggerSpan>,
    /// Text the current span was scanned from
    text: String,
    /// Result of the last acceptance; suppresses suggestions until the text moves on
    last_accepted: Option<EditResult>,
}

impl MentionSession {
    pub fn new(config: MentionConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &MentionConfig {
        &self.config
    }

    /// Re-scan after the text or caret changed.
    ///
    /// Returns the candidates to show; empty means the popup should hide.
    pub fn on_text_changed(&mut self, text: &str, caret: usize, tree: &Value) -> &[String] {
        let caret = clamp_offset(text, caret);

        if let Some(accepted) = &self.last_accepted
            && accepted.text == text
            && accepted.caret_offset == caret
        {
            self.hide();
            return &self.candidates;
        }
        self.last_accepted = None;

        let Some(span) = scan(
            text,
            caret,
            self.config.trigger(),
            self.config.closing_trigger(),
        ) else {
            self.hide();
            return &self.candidates;
        };

        let result = filter(&span.raw_content, tree, self.config.case_sensitive());
        log::trace!(
            "{} candidates for {:?} at {}",
            result.candidates.len(),
            span.raw_content,
            span.start_offset
        );

        self.candidates = result.candidates;
        self.parent_path = result.parent_path;
        self.selected_index = 0;
        self.span = Some(span);
        self.text = text.to_string();

        &self.candidates
    }

    /// Splice `candidate` into the text the current span was scanned from.
    ///
    /// Returns None when no trigger span is active.
    pub fn on_candidate_accepted(&mut self, candidate: &str) -> Option<EditResult> {
        let span = self.span.as_ref()?;
        let result = accept_with_config(
            &self.text,
            span,
            &self.parent_path,
            candidate,
            &self.config,
        );

        self.hide();
        self.last_accepted = Some(result.clone());
        Some(result)
    }

    /// Accept the highlighted candidate.
    pub fn accept_selected(&mut self) -> Option<EditResult> {
        let candidate = self.selected()?.to_string();
        self.on_candidate_accepted(&candidate)
    }

    pub fn hide(&mut self) {
        self.candidates.clear();
        self.parent_path.clear();
        self.selected_index = 0;
        self.span = None;
        self.text.clear();
    }

    /// Hide and forget the last acceptance.
    pub fn reset(&mut self) {
        self.hide();
        self.last_accepted = None;
    }

    pub fn is_visible(&self) -> bool {
        !self.candidates.is_empty()
    }

    pub fn is_active(&self) -> bool {
        self.span.is_some()
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn parent_path(&self) -> &[String] {
        &self.parent_path
    }

    pub fn span(&self) -> Option<&TriggerSpan> {
        self.span.as_ref()
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn selected(&self) -> Option<&str> {
        self.candidates.get(self.selected_index).map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if !self.candidates.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.candidates.len();
        }
    }

    pub fn select_previous(&mut self) {
        if !self.candidates.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.candidates.len() - 1
            } else {
                self.selected_index - 1
            };
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
