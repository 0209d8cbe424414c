//! Projection of raw project items into board tasks.
//!
//! A task takes its title from the item's "Title" field and its status
//! from the item's "Status" field; all other fields are ignored.
//!
//! # Example
//!
//! ```no_run
//! use projboard_github::{GitHubClient, project_to_tasks};
//! use projboard_protocol::KanbanBoard;
//!
//! # async fn example() -> projboard_github::Result<()> {
//! let client = GitHubClient::new();
//! let items = client.fetch_project_items("PVT_kwDOBd").await?;
//! let board = KanbanBoard::from_tasks(project_to_tasks(&items));
//! println!("{} tasks", board.total_tasks());
//! # Ok(())
//! # }
//! ```

use projboard_protocol::{Status, Task};
use tracing::debug;

use crate::response::RawItem;

/// Name of the project field holding the task title.
pub const TITLE_FIELD: &str = "Title";

/// Name of the project field holding the task status.
pub const STATUS_FIELD: &str = "Status";

/// Converts raw items into tasks, preserving order and duplicates.
#[must_use]
pub fn project_to_tasks(items: &[RawItem]) -> Vec<Task> {
    items.iter().map(item_to_task).collect()
}

/// Converts a single raw item into a task.
///
/// - A missing "Title" field leaves the title empty.
/// - A missing "Status" field, or a status label [`Status::parse`] does not
///   recognize, yields [`Status::Todo`].
/// - If a field appears more than once, the last value wins.
/// - Assignees come from the item's issue or pull request, if any.
#[must_use]
pub fn item_to_task(item: &RawItem) -> Task {
    let mut title = String::new();
    let mut status = Status::default();

    for value in &item.field_values.nodes {
        match value.field_name() {
            Some(TITLE_FIELD) => {
                title = value.text().unwrap_or_default().to_string();
            }
            Some(STATUS_FIELD) => {
                let label = value.option_name().unwrap_or_default();
                status = Status::parse(label);
                debug!(item = %item.id, label, %status, "parsed status");
            }
            _ => {}
        }
    }

    let assignees = item
        .content
        .as_ref()
        .map(|content| content.assignee_logins())
        .unwrap_or_default();

    Task::new(item.id.clone(), title, status).with_assignees(assignees)
}
