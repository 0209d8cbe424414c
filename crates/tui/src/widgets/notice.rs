//! Single-line notices shown while a screen has no data to display.

use projboard_protocol::FetchError;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::Line,
    widgets::{Paragraph, Widget, Wrap},
};

/// Text shown while a fetch is outstanding.
pub const LOADING_TEXT: &str = "Loading...";

/// Renders the loading notice.
pub fn render_loading(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::styled(LOADING_TEXT, Style::default().fg(Color::DarkGray)))
        .render(area, buf);
}

/// Renders `Error: <message>`, wrapped to the area width.
pub fn render_error(error: &FetchError, area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::styled(
        format!("Error: {}", error.message()),
        Style::default().fg(Color::Red),
    ))
    .wrap(Wrap { trim: false })
    .render(area, buf);
}
