use serde_json::Value;

use mentions::mention::{MentionConfig, MentionSession, NodeKind, resolve};
use mentions::template::EvaluationOptions;

use super::input_state::InputState;

/// Playground state: one text field, its mention session and the data tree.
pub struct App {
    pub input: InputState,
    pub session: MentionSession,
    pub tree: Value,
    pub options: EvaluationOptions,
    should_quit: bool,
}

impl App {
    pub fn new(tree: Value, config: MentionConfig, options: EvaluationOptions) -> Self {
        Self {
            input: InputState::new(),
            session: MentionSession::new(config),
            tree,
            options,
            should_quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Re-derive suggestions from the current text and caret.
    pub fn refresh_suggestions(&mut self) {
        let text = self.input.text().to_string();
        let caret = self.input.caret_offset();
        self.session.on_text_changed(&text, caret, &self.tree);
    }

    /// Accept the highlighted candidate and write the edit back to the field.
    pub fn accept_selected(&mut self) {
        if let Some(edit) = self.session.accept_selected() {
            log::debug!("Accepted candidate, caret now at {}", edit.caret_offset);
            self.input.set_text(&edit.text, edit.caret_offset);
            self.refresh_suggestions();
        }
    }

    /// Shape of the node a candidate would address, for popup labels.
    pub fn candidate_kind(&self, candidate: &str) -> Option<NodeKind> {
        let mut path: Vec<&str> = self.session.parent_path().iter().map(String::as_str).collect();
        path.push(candidate);
        resolve(&path, &self.tree).map(NodeKind::of)
    }
}
