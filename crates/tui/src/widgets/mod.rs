//! Widget components for the projboard TUI.
//!
//! Each widget is a pure function rendering data into a [`Buffer`], which
//! keeps them easy to test and compose.
//!
//! # Modules
//!
//! - [`board`]: The three status columns side by side
//! - [`column`]: A single column with its task cards
//! - [`task_card`]: A task card, color coded by status
//! - [`project_list`]: The picker's list of projects
//! - [`notice`]: Loading and error notices
//! - [`status_bar`]: The footer with keybinding hints
//!
//! [`Buffer`]: ratatui::buffer::Buffer

pub mod board;
pub mod column;
pub mod notice;
pub mod project_list;
pub mod status_bar;
pub mod task_card;

pub use board::render_board;
pub use column::{ColumnPosition, render_column};
pub use notice::{LOADING_TEXT, render_error, render_loading};
pub use project_list::render_project_list;
pub use status_bar::{KeyHint, render_status_bar};
pub use task_card::{render_task_card, status_color};
