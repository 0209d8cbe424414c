//! The two screens of the application.
//!
//! Each screen is a small state machine (`Loading`, `Loaded`, `Error`)
//! driven by [`Message`](projboard_protocol::Message)s. The picker starts
//! the session; selecting a project replaces it with a board. There is no
//! way back.

pub mod board;
pub mod picker;

pub use board::{BOARD_HINTS, BoardScreen, BoardState};
pub use picker::{PICKER_HINTS, PickerScreen, PickerState};
