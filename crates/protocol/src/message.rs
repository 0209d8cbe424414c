//! TUI message types for event handling.
//!
//! Every input to a screen is a [`Message`]: key presses translated by the
//! input handler, terminal resizes, and the single result message of each
//! fetch.

use crate::error::FetchResult;
use crate::task::{ProjectSummary, Task};

/// Messages consumed by the active screen.
///
/// # Examples
///
/// ```
/// use projboard_protocol::Message;
///
/// let msg = Message::Quit;
/// assert!(msg.is_terminating());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Move the cursor up.
    NavigateUp,
    /// Move the cursor down.
    NavigateDown,
    /// Focus the previous column.
    NavigateLeft,
    /// Focus the next column.
    NavigateRight,
    /// Confirm the highlighted item.
    Select,
    /// Quit the application.
    Quit,
    /// The terminal was resized to `width` x `height` cells.
    Resize {
        /// New terminal width.
        width: u16,
        /// New terminal height.
        height: u16,
    },
    /// Result of listing the organization's projects.
    ProjectsLoaded(FetchResult<Vec<ProjectSummary>>),
    /// Result of loading a project's items, already projected into tasks.
    ItemsLoaded(FetchResult<Vec<Task>>),
}

impl Message {
    /// Returns `true` if this message should terminate the application.
    #[must_use]
    pub fn is_terminating(&self) -> bool {
        matches!(self, Self::Quit)
    }
}
