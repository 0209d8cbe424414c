//! Task card rendering widget.
//!
//! Cards are color coded by the status of their task.

use projboard_protocol::{Status, Task};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Returns the color associated with a status.
///
/// | Status | Color |
/// |--------|-------|
/// | `Todo` | Gray |
/// | `InProgress` | Blue |
/// | `Done` | Green |
///
/// # Examples
///
/// ```
/// use projboard_protocol::Status;
/// use projboard_tui::widgets::status_color;
/// use ratatui::style::Color;
///
/// assert_eq!(status_color(Status::InProgress), Color::Blue);
/// ```
#[must_use]
pub const fn status_color(status: Status) -> Color {
    match status {
        Status::Todo => Color::DarkGray,
        Status::InProgress => Color::Blue,
        Status::Done => Color::Green,
    }
}

/// Brighter variant of [`status_color`] for the selected card.
#[must_use]
const fn status_color_bright(status: Status) -> Color {
    match status {
        Status::Todo => Color::Gray,
        Status::InProgress => Color::LightBlue,
        Status::Done => Color::LightGreen,
    }
}

/// Renders a task card to the buffer.
///
/// ```text
/// ┌──────────────┐
/// │Write spec    │
/// │@octocat      │
/// └──────────────┘
/// ```
///
/// The second line lists the assignees, or "unassigned". Both lines are
/// truncated to the card width. Nothing is drawn in areas smaller than
/// 4×3.
pub fn render_task_card(task: &Task, is_selected: bool, area: Rect, buf: &mut Buffer) {
    if area.width < 4 || area.height < 3 {
        return;
    }

    let (border_color, title_style, detail_style) = if is_selected {
        let bright = status_color_bright(task.status);
        (
            bright,
            Style::default().fg(bright).add_modifier(Modifier::BOLD),
            Style::default().fg(Color::White),
        )
    } else {
        (
            status_color(task.status),
            Style::default().fg(Color::White),
            Style::default().fg(Color::DarkGray),
        )
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let title = if task.title.is_empty() {
        "(untitled)"
    } else {
        task.title.as_str()
    };

    let content = vec![
        Line::from(Span::styled(truncate_string(title, inner_width), title_style)),
        Line::from(Span::styled(
            truncate_string(&assignee_line(task), inner_width),
            detail_style,
        )),
    ];

    Paragraph::new(content)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border_color)),
        )
        .render(area, buf);
}

/// Formats the assignees as `@login, @login`.
fn assignee_line(task: &Task) -> String {
    if task.assignees.is_empty() {
        return "unassigned".to_string();
    }
    task.assignees
        .iter()
        .map(|login| format!("@{login}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Truncates a string to `max_width` characters, ending in "..." if cut.
pub(crate) fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else if max_width > 3 {
        let truncated: String = s.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    } else {
        s.chars().take(max_width).collect()
    }
}
