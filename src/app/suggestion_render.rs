//! Suggestion popup rendering
//!
//! Draws the candidate list for the active trigger just above the text field.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};
use unicode_width::UnicodeWidthStr;

use mentions::mention::NodeKind;

use super::state::App;
use crate::widgets::popup;

// Popup display constants
const MAX_VISIBLE_SUGGESTIONS: usize = 10;
const MAX_POPUP_WIDTH: usize = 60;
const POPUP_BORDER_HEIGHT: u16 = 2;
const POPUP_PADDING: u16 = 4;
const POPUP_OFFSET_X: u16 = 2;
const TYPE_LABEL_SPACING: usize = 3;

fn kind_label(kind: Option<NodeKind>) -> String {
    match kind {
        Some(kind) => format!("[{}]", kind),
        None => String::new(),
    }
}

fn kind_color(kind: Option<NodeKind>) -> Color {
    match kind {
        Some(NodeKind::Object) => Color::Cyan,
        Some(NodeKind::Array) => Color::Green,
        Some(NodeKind::String) => Color::Yellow,
        Some(NodeKind::Number) | Some(NodeKind::Boolean) => Color::Magenta,
        Some(NodeKind::Null) | None => Color::DarkGray,
    }
}

/// Render the suggestion popup above the text field
pub fn render_popup(app: &App, frame: &mut Frame, input_area: Rect) {
    let candidates = app.session.candidates();
    if candidates.is_empty() {
        return;
    }

    // Scroll the window so the selection stays visible
    let selected = app.session.selected_index();
    let first_visible = selected.saturating_sub(MAX_VISIBLE_SUGGESTIONS - 1);

    let visible: Vec<(usize, &String, Option<NodeKind>)> = candidates
        .iter()
        .enumerate()
        .skip(first_visible)
        .take(MAX_VISIBLE_SUGGESTIONS)
        .map(|(i, candidate)| (i, candidate, app.candidate_kind(candidate)))
        .collect();

    let max_text_width = visible
        .iter()
        .map(|(_, candidate, _)| candidate.width())
        .max()
        .unwrap_or(0);

    let max_label_width = visible
        .iter()
        .map(|(_, _, kind)| kind_label(*kind).width())
        .max()
        .unwrap_or(0);

    let popup_width =
        ((max_text_width + max_label_width + TYPE_LABEL_SPACING).min(MAX_POPUP_WIDTH) as u16)
            + POPUP_PADDING;
    let popup_height = (visible.len() as u16) + POPUP_BORDER_HEIGHT;

    let popup_area =
        popup::popup_above_anchor(input_area, popup_width, popup_height, POPUP_OFFSET_X);

    let items: Vec<ListItem> = visible
        .iter()
        .map(|(i, candidate, kind)| {
            let padding = " ".repeat(max_text_width.saturating_sub(candidate.width()));
            let label = kind_label(*kind);

            let line = if *i == selected {
                Line::from(vec![
                    Span::styled(
                        format!("► {} {}", candidate, padding),
                        Style::default()
                            .fg(Color::Black)
                            .bg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(" {}", label),
                        Style::default().fg(Color::Black).bg(Color::Cyan),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("  {} {}", candidate, padding),
                        Style::default().fg(Color::White).bg(Color::Black),
                    ),
                    Span::styled(
                        format!(" {}", label),
                        Style::default().fg(kind_color(*kind)).bg(Color::Black),
                    ),
                ])
            };

            ListItem::new(line)
        })
        .collect();

    // Clear the background area to prevent transparency
    popup::clear_area(frame, popup_area);

    let title = format!(" Suggestions ({}) ", candidates.len());
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan))
            .style(Style::default().bg(Color::Black)),
    );

    frame.render_widget(list, popup_area);
}
