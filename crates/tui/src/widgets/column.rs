//! Board column rendering widget.
//!
//! A column shows its header (status name and task count) over a vertical
//! stack of task cards, scrolled so the selected card stays visible.

use projboard_protocol::Column;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::task_card::render_task_card;
use crate::layout::TASK_CARD_HEIGHT;

/// Position of a column in the horizontal layout.
///
/// Adjacent columns share a single vertical border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnPosition {
    /// Leftmost column: rounded corners on the left, no right border.
    First,
    /// Inner column: T-connectors on the left, no right border.
    Middle,
    /// Rightmost column: T-connectors on the left, rounded on the right.
    Last,
}

impl ColumnPosition {
    /// Position of the column at `index` among `count` columns.
    #[must_use]
    pub const fn of(index: usize, count: usize) -> Self {
        if index == 0 {
            Self::First
        } else if index + 1 >= count {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

const BORDER_SET_FIRST: border::Set = border::Set {
    top_left: "╭",
    top_right: "─",
    bottom_left: "╰",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_MIDDLE: border::Set = border::Set {
    top_left: "┬",
    top_right: "─",
    bottom_left: "┴",
    bottom_right: "─",
    vertical_left: "│",
    vertical_right: " ",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

const BORDER_SET_LAST: border::Set = border::Set {
    top_left: "┬",
    top_right: "╮",
    bottom_left: "┴",
    bottom_right: "╯",
    vertical_left: "│",
    vertical_right: "│",
    horizontal_top: "─",
    horizontal_bottom: "─",
};

/// Renders a single column to the buffer.
///
/// `selected_idx` is only honored when `is_focused` is set. `prev_focused`
/// tells whether the column to the left has focus, in which case the
/// shared border is highlighted too.
///
/// ```text
/// ╭In Progress (2)────┬
/// │┌────────────────┐ │
/// ││Write spec      │ │
/// ││@octocat        │ │
/// │└────────────────┘ │
/// ╰───────────────────┴
/// ```
pub fn render_column(
    column: &Column,
    is_focused: bool,
    selected_idx: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
    position: ColumnPosition,
    prev_focused: bool,
) {
    let border_style = if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if is_focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let title = format!("{} ({})", column.status.display_name(), column.len());

    // Only the last column draws a right border
    let borders = match position {
        ColumnPosition::First | ColumnPosition::Middle => {
            Borders::TOP | Borders::BOTTOM | Borders::LEFT
        }
        ColumnPosition::Last => Borders::ALL,
    };
    let border_set = match position {
        ColumnPosition::First => BORDER_SET_FIRST,
        ColumnPosition::Middle => BORDER_SET_MIDDLE,
        ColumnPosition::Last => BORDER_SET_LAST,
    };

    let block = Block::default()
        .title(Span::styled(title, title_style))
        .borders(borders)
        .border_set(border_set)
        .border_style(border_style);

    let inner_area = block.inner(area);
    block.render(area, buf);

    // The left border is shared with the previous column
    if prev_focused && !is_focused && area.width > 0 {
        let highlight_style = Style::default().fg(Color::Cyan);
        for y in area.y..area.y.saturating_add(area.height) {
            if let Some(cell) = buf.cell_mut((area.x, y)) {
                cell.set_style(highlight_style);
            }
        }
    }

    if column.is_empty() {
        render_empty_placeholder(inner_area, buf);
        return;
    }

    let visible_tasks = (inner_area.height / TASK_CARD_HEIGHT).max(1) as usize;
    let selected_idx = selected_idx.filter(|_| is_focused);
    let scroll_offset = calculate_scroll_offset(selected_idx, column.len(), visible_tasks);
    let task_count = column.len().saturating_sub(scroll_offset).min(visible_tasks);

    let task_areas = Layout::vertical(
        (0..task_count)
            .map(|_| Constraint::Length(TASK_CARD_HEIGHT))
            .chain(std::iter::once(Constraint::Min(0))),
    )
    .split(inner_area);

    let visible = column.tasks.iter().enumerate().skip(scroll_offset);
    for ((task_idx, task), task_area) in visible.zip(task_areas.iter().take(task_count)) {
        render_task_card(task, selected_idx == Some(task_idx), *task_area, buf);
    }
}

fn render_empty_placeholder(area: Rect, buf: &mut Buffer) {
    Paragraph::new(Line::from(Span::styled(
        "No tasks",
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
    )))
    .render(area, buf);
}

/// Returns the index of the first visible task so that the selected one
/// is on screen, roughly centered once the column overflows.
fn calculate_scroll_offset(
    selected_idx: Option<usize>,
    total_tasks: usize,
    visible_tasks: usize,
) -> usize {
    let Some(selected) = selected_idx else {
        return 0;
    };
    if total_tasks <= visible_tasks {
        return 0;
    }

    let max_offset = total_tasks - visible_tasks;
    selected.saturating_sub(visible_tasks / 2).min(max_offset)
}
