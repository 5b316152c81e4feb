use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::{CursorMove, TextArea};

/// Single-line text field standing in for the host editing surface.
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

impl InputState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Text ")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        textarea.set_cursor_line_style(Style::default());

        Self { textarea }
    }

    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// Caret as a byte offset into [`Self::text`].
    pub fn caret_offset(&self) -> usize {
        let column = self.textarea.cursor().1;
        let text = self.text();
        text.char_indices()
            .nth(column)
            .map(|(offset, _)| offset)
            .unwrap_or(text.len())
    }

    /// Replace the whole line and place the caret at a byte offset.
    pub fn set_text(&mut self, text: &str, caret_offset: usize) {
        self.textarea.move_cursor(CursorMove::End);
        self.textarea.delete_line_by_head();
        self.textarea.insert_str(text);

        let column = text
            .get(..caret_offset)
            .map(|before| before.chars().count())
            .unwrap_or_else(|| text.chars().count());
        self.textarea
            .move_cursor(CursorMove::Jump(0, column.min(u16::MAX as usize) as u16));
    }
}
