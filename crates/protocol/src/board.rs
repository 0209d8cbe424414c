//! Kanban board types and the status partition.
//!
//! A [`KanbanBoard`] holds one [`Column`] per [`Status`]. Boards are never
//! edited in place: each fetch builds a fresh board with
//! [`KanbanBoard::from_tasks`].

use serde::{Deserialize, Serialize};

use crate::status::Status;
use crate::task::Task;

/// Splits tasks into `(todo, in_progress, done)` by status.
///
/// The partition is exhaustive and exclusive, and each output keeps the
/// relative order the tasks had in the input.
///
/// # Examples
///
/// ```
/// use projboard_protocol::{Status, Task, partition_by_status};
///
/// let tasks = vec![
///     Task::new("1", "a", Status::Done),
///     Task::new("2", "b", Status::Todo),
///     Task::new("3", "c", Status::Done),
/// ];
/// let (todo, in_progress, done) = partition_by_status(tasks);
/// assert_eq!(todo.len(), 1);
/// assert!(in_progress.is_empty());
/// assert_eq!(done[0].id, "1");
/// assert_eq!(done[1].id, "3");
/// ```
#[must_use]
pub fn partition_by_status(tasks: Vec<Task>) -> (Vec<Task>, Vec<Task>, Vec<Task>) {
    let mut todo = Vec::new();
    let mut in_progress = Vec::new();
    let mut done = Vec::new();
    for task in tasks {
        match task.status {
            Status::Todo => todo.push(task),
            Status::InProgress => in_progress.push(task),
            Status::Done => done.push(task),
        }
    }
    (todo, in_progress, done)
}

/// A single column of the board.
///
/// # Examples
///
/// ```
/// use projboard_protocol::{Column, Status};
///
/// let column = Column::new(Status::Done);
/// assert!(column.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// The status shared by every task in this column.
    pub status: Status,
    /// Tasks in source order.
    pub tasks: Vec<Task>,
}

impl Column {
    /// Creates an empty column.
    #[must_use]
    pub const fn new(status: Status) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Returns the number of tasks in this column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns `true` if the column has no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Returns the task at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }
}

/// A Kanban board with three fixed columns.
///
/// # Examples
///
/// ```
/// use projboard_protocol::{KanbanBoard, Status, Task};
///
/// let board = KanbanBoard::from_tasks(vec![
///     Task::new("1", "Write spec", Status::InProgress),
/// ]);
/// assert_eq!(board.column(Status::InProgress).len(), 1);
/// assert_eq!(board.total_tasks(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KanbanBoard {
    /// The three columns, indexed by [`Status::index`].
    pub columns: [Column; 3],
}

impl Default for KanbanBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl KanbanBoard {
    /// Creates an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self {
            columns: [
                Column::new(Status::Todo),
                Column::new(Status::InProgress),
                Column::new(Status::Done),
            ],
        }
    }

    /// Builds a board from a flat task list using [`partition_by_status`].
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let (todo, in_progress, done) = partition_by_status(tasks);
        Self {
            columns: [
                Column {
                    status: Status::Todo,
                    tasks: todo,
                },
                Column {
                    status: Status::InProgress,
                    tasks: in_progress,
                },
                Column {
                    status: Status::Done,
                    tasks: done,
                },
            ],
        }
    }

    /// Returns the column for the given status.
    #[must_use]
    pub fn column(&self, status: Status) -> &Column {
        &self.columns[status.index()]
    }

    /// Returns the total number of tasks across all columns.
    #[must_use]
    pub fn total_tasks(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }
}
