//! Single-line text field rendering.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Draw a bordered text field. `masked` hides the value behind asterisks.
pub(super) fn draw_field(f: &mut Frame, area: Rect, title: &str, value: &str, focused: bool, masked: bool) {
    let shown = if masked {
        "*".repeat(value.chars().count())
    } else {
        value.to_string()
    };

    let (text, border_color) = if focused {
        (format!("{}▌", shown), Color::Green)
    } else {
        (shown, Color::Gray)
    };

    f.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color))
                .title(title.to_string()),
        ),
        area,
    );
}
