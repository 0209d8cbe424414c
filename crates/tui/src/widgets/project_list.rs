//! Project list rendering widget for the picker screen.

use projboard_protocol::ProjectSummary;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::task_card::truncate_string;

/// Marker in front of the project under the cursor.
const CURSOR_MARKER: &str = "> ";

/// Indentation in front of the other projects.
const NO_MARKER: &str = "  ";

/// Renders one project title per row, the one at `cursor` prefixed with
/// `"> "` and highlighted.
///
/// ```text
/// > Roadmap
///   Bugs
///   Docs
/// ```
///
/// When the list is taller than `area`, it scrolls to keep the cursor row
/// visible. An empty list renders a placeholder.
pub fn render_project_list(
    projects: &[ProjectSummary],
    cursor: usize,
    area: Rect,
    buf: &mut Buffer,
) {
    if projects.is_empty() {
        Paragraph::new(Line::from(Span::styled(
            "No projects",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )))
        .render(area, buf);
        return;
    }

    let visible_rows = usize::from(area.height).max(1);
    let offset = (cursor + 1).saturating_sub(visible_rows);
    let title_width = usize::from(area.width).saturating_sub(CURSOR_MARKER.len());

    let lines: Vec<Line> = projects
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(i, project)| {
            let title = truncate_string(&project.title, title_width);
            if i == cursor {
                Line::from(vec![
                    Span::styled(CURSOR_MARKER, Style::default().fg(Color::Yellow)),
                    Span::styled(
                        title,
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                ])
            } else {
                Line::from(vec![
                    Span::raw(NO_MARKER),
                    Span::styled(title, Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    Paragraph::new(lines).render(area, buf);
}
