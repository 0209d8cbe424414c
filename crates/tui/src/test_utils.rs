//! Rendering helpers shared by the TUI tests.

use ratatui::{buffer::Buffer, layout::Rect};

/// Renders the buffer as text, one line per row, trailing spaces trimmed.
#[must_use]
pub(crate) fn buffer_to_string(buf: &Buffer) -> String {
    (0..buf.area.height)
        .map(|y| {
            let row: String = (0..buf.area.width)
                .filter_map(|x| buf.cell((buf.area.x + x, buf.area.y + y)))
                .map(|cell| cell.symbol())
                .collect();
            format!("{}\n", row.trim_end_matches(' '))
        })
        .collect()
}

/// Runs `render` against a fresh `width`×`height` buffer and returns its text.
pub(crate) fn render_to_string(
    width: u16,
    height: u16,
    render: impl FnOnce(Rect, &mut Buffer),
) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    render(area, &mut buf);
    buffer_to_string(&buf)
}
