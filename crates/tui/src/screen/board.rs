//! Kanban board screen.
//!
//! The board loads the items of one project, buckets them by status and
//! shows the three columns side by side. Left and right move the focus
//! between columns; up and down move the selection inside the focused
//! column.

use projboard_protocol::{
    Column, FetchError, FetchResult, KanbanBoard, Message, ProjectSummary, Status, Task,
};
use ratatui::{buffer::Buffer, layout::Rect};
use tracing::{debug, warn};

use crate::{
    command::Command,
    layout::Viewport,
    widgets::{KeyHint, render_board, render_error, render_loading},
};

/// Keybinding hints shown under the board.
pub const BOARD_HINTS: &[KeyHint] = &[("←→", "Column"), ("↑↓", "Task"), ("Ctrl+C", "Quit")];

/// Lifecycle of the board data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardState {
    /// The project items have been requested.
    Loading,
    /// Items arrived and were bucketed into columns.
    Loaded(KanbanBoard),
    /// The fetch failed. Terminal for this screen.
    Error(FetchError),
}

/// The Kanban board of a single project.
#[derive(Debug, Clone)]
pub struct BoardScreen {
    project: ProjectSummary,
    state: BoardState,
    focus: Status,
    selected_task: Option<usize>,
    viewport: Viewport,
}

impl BoardScreen {
    /// Creates a board for `project`, waiting for its items.
    #[must_use]
    pub fn new(project: ProjectSummary, viewport: Viewport) -> Self {
        Self {
            project,
            state: BoardState::Loading,
            focus: Status::Todo,
            selected_task: None,
            viewport,
        }
    }

    /// Returns the fetch to schedule when the board is shown.
    #[must_use]
    pub fn init(&self) -> Command {
        Command::LoadProjectItems {
            project_id: self.project.id.clone(),
        }
    }

    /// The project on display.
    #[must_use]
    pub fn project(&self) -> &ProjectSummary {
        &self.project
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &BoardState {
        &self.state
    }

    /// Last computed viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Status of the focused column.
    #[must_use]
    pub fn focus(&self) -> Status {
        self.focus
    }

    /// Index of the selected task within the focused column.
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.selected_task
    }

    /// The loaded board, if any.
    #[must_use]
    pub fn board(&self) -> Option<&KanbanBoard> {
        match &self.state {
            BoardState::Loaded(board) => Some(board),
            BoardState::Loading | BoardState::Error(_) => None,
        }
    }

    /// The selected task, if any.
    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.focused_column()?.get(self.selected_task?)
    }

    fn focused_column(&self) -> Option<&Column> {
        self.board().map(|board| board.column(self.focus))
    }

    /// Applies a message. Enter is ignored.
    pub fn update(&mut self, msg: Message) {
        match msg {
            Message::Resize { width, height } => {
                self.viewport = Viewport::from_terminal(width, height);
            }
            Message::ItemsLoaded(result) => self.finish_loading(result),
            Message::NavigateLeft => self.focus_column(self.focus.prev()),
            Message::NavigateRight => self.focus_column(self.focus.next()),
            Message::NavigateUp => {
                self.selected_task = self.selected_task.map(|idx| idx.saturating_sub(1));
            }
            Message::NavigateDown => {
                let len = self.focused_column().map_or(0, Column::len);
                self.selected_task = self
                    .selected_task
                    .map(|idx| (idx + 1).min(len.saturating_sub(1)));
            }
            _ => {}
        }
    }

    fn finish_loading(&mut self, result: FetchResult<Vec<Task>>) {
        match result {
            Ok(tasks) if self.state == BoardState::Loading => {
                let board = KanbanBoard::from_tasks(tasks);
                debug!(
                    project = %self.project.id,
                    todo = board.column(Status::Todo).len(),
                    in_progress = board.column(Status::InProgress).len(),
                    done = board.column(Status::Done).len(),
                    "board loaded"
                );
                self.state = BoardState::Loaded(board);
                self.focus_column(self.focus);
            }
            Ok(_) => debug!(project = %self.project.id, "ignoring items, board is not loading"),
            Err(error) => {
                warn!(%error, project = %self.project.id, "project items unavailable");
                self.state = BoardState::Error(error);
                self.selected_task = None;
            }
        }
    }

    /// Moves the focus and clamps the selection to the new column.
    fn focus_column(&mut self, status: Status) {
        if self.board().is_none() {
            return;
        }
        self.focus = status;

        let len = self.focused_column().map_or(0, Column::len);
        self.selected_task = if len == 0 {
            None
        } else {
            Some(self.selected_task.unwrap_or(0).min(len - 1))
        };
    }

    /// Renders the current state into `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        match &self.state {
            BoardState::Loading => render_loading(area, buf),
            BoardState::Loaded(board) => {
                render_board(board, self.focus, self.selected_task, area, buf);
            }
            BoardState::Error(error) => render_error(error, area, buf),
        }
    }
}
