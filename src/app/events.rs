use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use super::state::App;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) => {
                self.input.textarea.insert_str(text.replace(['\n', '\r'], " "));
                self.refresh_suggestions();
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit();
            return;
        }

        if self.session.is_visible() && self.handle_suggestion_keys(key) {
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit(),
            // Single-line field
            KeyCode::Enter => {}
            _ => {
                self.input.textarea.input(key);
                self.refresh_suggestions();
            }
        }
    }

    /// Keys that act on the suggestion popup while it is visible.
    /// Returns true if the key was consumed.
    fn handle_suggestion_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Down => self.session.select_next(),
            KeyCode::Up => self.session.select_previous(),
            KeyCode::Tab | KeyCode::Enter => self.accept_selected(),
            KeyCode::Esc => self.session.hide(),
            _ => return false,
        }
        true
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
