//! Shared protocol types for the projboard application.
//!
//! This crate defines the view-model types used across all projboard
//! components: task statuses, tasks, the three-column board, the messages
//! screens react to, and the opaque fetch error.
//!
//! # Overview
//!
//! The crate is organized into the following modules:
//!
//! - [`status`]: The cyclic `Status` tag and its label parsing
//! - [`task`]: `Task` and `ProjectSummary` records
//! - [`board`]: Board columns and the status partition
//! - [`message`]: TUI event messages
//! - [`error`]: The `FetchError` shown by screens
//!
//! # Examples
//!
//! ```
//! use projboard_protocol::{KanbanBoard, Status, Task};
//!
//! let tasks = vec![
//!     Task::new("PVTI_1", "Write spec", Status::parse("In Progress")),
//!     Task::new("PVTI_2", "Ship it", Status::parse("Done")),
//! ];
//! let board = KanbanBoard::from_tasks(tasks);
//!
//! assert_eq!(board.column(Status::InProgress).len(), 1);
//! assert_eq!(board.column(Status::Done).len(), 1);
//! ```

pub mod board;
pub mod error;
pub mod message;
pub mod status;
pub mod task;

// Re-export primary types at crate root for convenience
pub use board::{Column, KanbanBoard, partition_by_status};
pub use error::{FetchError, FetchResult};
pub use message::Message;
pub use status::Status;
pub use task::{ProjectSummary, Task, TaskId};
