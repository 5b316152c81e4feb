use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use mentions::template::{evaluate, lookup, placeholders};

use super::state::App;
use super::suggestion_render;

const INPUT_HEIGHT: u16 = 3;
const STATUS_HEIGHT: u16 = 1;

impl App {
    /// Render the preview pane, the text field, the status line and the popup
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(INPUT_HEIGHT),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(frame.area());

        let (preview_area, input_area, status_area) = (layout[0], layout[1], layout[2]);

        self.render_preview(frame, preview_area);
        frame.render_widget(&self.input.textarea, input_area);
        self.render_status(frame, status_area);

        // Popup last so it draws over the preview
        suggestion_render::render_popup(self, frame, input_area);
    }

    fn render_preview(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Preview ")
            .border_style(Style::default().fg(Color::DarkGray));

        let paragraph = match evaluate(self.input.text(), &self.tree, &self.options) {
            Ok(rendered) => Paragraph::new(rendered),
            Err(e) => Paragraph::new(e.to_string()).style(Style::default().fg(Color::Red)),
        };

        frame.render_widget(paragraph.block(block).wrap(Wrap { trim: false }), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let found = placeholders(self.input.text());
        let unresolved: Vec<&str> = found
            .iter()
            .filter(|p| lookup(&p.path, &self.tree).is_none())
            .map(|p| p.path.as_str())
            .collect();

        let mut spans = vec![Span::styled(
            format!(" {} placeholder(s)", found.len()),
            Style::default().fg(Color::DarkGray),
        )];

        if !unresolved.is_empty() {
            spans.push(Span::styled(
                format!("  unresolved: {}", unresolved.join(", ")),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ));
        }

        spans.push(Span::styled(
            "  Tab/Enter accept · ↑↓ select · Esc close/quit",
            Style::default().fg(Color::DarkGray),
        ));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
