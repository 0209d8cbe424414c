//! Kanban board rendering widget.

use projboard_protocol::{KanbanBoard, Status};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
};

use super::column::{ColumnPosition, render_column};

/// Renders the three columns side by side with equal widths.
///
/// The column of `focus` is highlighted, and within it the card at
/// `selected_task`, if any.
///
/// ```text
/// ╭Todo (2)──────┬In Progress (1)┬Done (0)──────╮
/// │ Task 1       │ Task 3        │ No tasks     │
/// │ Task 2       │               │              │
/// ╰──────────────┴───────────────┴──────────────╯
/// ```
///
/// # Examples
///
/// ```
/// use projboard_protocol::{KanbanBoard, Status, Task};
/// use projboard_tui::widgets::render_board;
/// use ratatui::{buffer::Buffer, layout::Rect};
///
/// let board = KanbanBoard::from_tasks(vec![Task::new("PVTI_1", "Write spec", Status::Todo)]);
/// let area = Rect::new(0, 0, 80, 20);
/// let mut buf = Buffer::empty(area);
///
/// render_board(&board, Status::Todo, Some(0), area, &mut buf);
/// ```
pub fn render_board(
    board: &KanbanBoard,
    focus: Status,
    selected_task: Option<usize>,
    area: Rect,
    buf: &mut Buffer,
) {
    let column_areas = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(area);
    let column_count = board.columns.len();

    for (i, (column, column_area)) in board.columns.iter().zip(column_areas.iter()).enumerate() {
        let is_focused = column.status == focus;
        let prev_focused = i > 0 && focus.index() == i - 1;
        let selection = if is_focused { selected_task } else { None };

        render_column(
            column,
            is_focused,
            selection,
            *column_area,
            buf,
            ColumnPosition::of(i, column_count),
            prev_focused,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::render_to_string;
    use projboard_protocol::Task;

    #[test]
    fn empty_board_shows_all_columns() {
        let board = KanbanBoard::new();
        let content = render_to_string(90, 20, |area, buf| {
            render_board(&board, Status::Todo, None, area, buf);
        });

        assert!(content.contains("Todo (0)"));
        assert!(content.contains("In Progress (0)"));
        assert!(content.contains("Done (0)"));
    }

    #[test]
    fn tasks_land_in_their_columns() {
        let board = KanbanBoard::from_tasks(vec![
            Task::new("PVTI_1", "Write spec", Status::InProgress),
            Task::new("PVTI_2", "Ship", Status::Done),
            Task::new("PVTI_3", "Plan", Status::Done),
        ]);
        let content = render_to_string(90, 20, |area, buf| {
            render_board(&board, Status::InProgress, Some(0), area, buf);
        });

        assert!(content.contains("Todo (0)"));
        assert!(content.contains("In Progress (1)"));
        assert!(content.contains("Done (2)"));
        assert!(content.contains("Write spec"));
    }

    #[test]
    fn narrow_area_does_not_panic() {
        let board = KanbanBoard::from_tasks(vec![Task::new("PVTI_1", "Write spec", Status::Todo)]);
        render_to_string(10, 4, |area, buf| {
            render_board(&board, Status::Done, Some(0), area, buf);
        });
    }
}
