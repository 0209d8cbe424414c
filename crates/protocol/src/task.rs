//! Task and project view types.
//!
//! These are the flat records the screens display: a [`ProjectSummary`] per
//! row of the project picker, and a [`Task`] per card on the board.

use serde::{Deserialize, Serialize};

use crate::status::Status;

/// Identifier of a task, as assigned by GitHub (a project item node ID).
pub type TaskId = String;

/// A project as listed in the picker.
///
/// # Examples
///
/// ```
/// use projboard_protocol::ProjectSummary;
///
/// let project = ProjectSummary::new("PVT_kwDOA", "Roadmap");
/// assert_eq!(project.title, "Roadmap");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectSummary {
    /// GraphQL node ID of the project.
    pub id: String,
    /// Human-readable project title.
    pub title: String,
}

impl ProjectSummary {
    /// Creates a new project summary.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A card on the board.
///
/// Tasks are built once per fetch and never mutated; a new fetch replaces
/// the whole set.
///
/// # Examples
///
/// ```
/// use projboard_protocol::{Status, Task};
///
/// let task = Task::new("PVTI_1", "Write spec", Status::InProgress);
/// assert_eq!(task.status, Status::InProgress);
/// assert!(task.assignees.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Remote identifier of the project item.
    pub id: TaskId,
    /// Value of the project's "Title" field, empty if absent.
    pub title: String,
    /// Column the task belongs to.
    pub status: Status,
    /// Logins assigned to the underlying issue or pull request.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub assignees: Vec<String>,
}

impl Task {
    /// Creates a task with no assignees.
    #[must_use]
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, status: Status) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status,
            assignees: Vec::new(),
        }
    }

    /// Returns this task with the given assignees.
    ///
    /// # Examples
    ///
    /// ```
    /// use projboard_protocol::{Status, Task};
    ///
    /// let task = Task::new("PVTI_1", "Fix login", Status::Todo)
    ///     .with_assignees(vec!["octocat".to_string()]);
    /// assert_eq!(task.assignees, vec!["octocat"]);
    /// ```
    #[must_use]
    pub fn with_assignees(mut self, assignees: Vec<String>) -> Self {
        self.assignees = assignees;
        self
    }
}
