//! Status bar rendering widget.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// A key binding hint: the key and what it does.
pub type KeyHint = (&'static str, &'static str);

/// Renders the footer with keybinding hints.
///
/// ```text
/// ╭──────────────────────────────────────────╮
/// │↑↓ Move  Enter Open  Ctrl+C Quit          │
/// ╰──────────────────────────────────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use projboard_tui::widgets::render_status_bar;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let area = Rect::new(0, 0, 80, 3);
/// let mut buf = Buffer::empty(area);
///
/// render_status_bar(&[("Ctrl+C", "Quit")], area, &mut buf);
/// ```
pub fn render_status_bar(hints: &[KeyHint], area: Rect, buf: &mut Buffer) {
    let key_style = Style::default().fg(Color::Yellow);
    let text_style = Style::default().fg(Color::White);

    let spans: Vec<Span> = hints
        .iter()
        .enumerate()
        .flat_map(|(i, (key, action))| {
            let separator = if i == 0 { "" } else { "  " };
            [
                Span::raw(separator),
                Span::styled(*key, key_style),
                Span::styled(format!(" {action}"), text_style),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .render(area, buf);
}
