use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup directly above `anchor`, shifted right by `x_offset`.
///
/// The popup never extends above the top of the screen or past the
/// anchor's right edge.
pub fn popup_above_anchor(anchor: Rect, width: u16, height: u16, x_offset: u16) -> Rect {
    let popup_x = anchor.x.saturating_add(x_offset);
    let popup_height = height.min(anchor.y);
    let popup_y = anchor.y - popup_height;

    Rect {
        x: popup_x,
        y: popup_y,
        width: width.min(anchor.width.saturating_sub(x_offset.saturating_mul(2))),
        height: popup_height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
