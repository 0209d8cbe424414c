//! Terminal UI for projboard.
//!
//! This crate provides the Ratatui-based interface: a project picker and a
//! three-column Kanban board, driven by an Elm-style update loop.
//!
//! # Overview
//!
//! - [`app`]: The application struct, active screen and run loop
//! - [`screen`]: The picker and board state machines
//! - [`command`]: Fetches requested by the screens
//! - [`event`]: Key bindings and event polling
//! - [`layout`]: Layout constants and the viewport
//! - [`terminal`]: Terminal setup, teardown, and panic handling
//! - [`widgets`]: Pure rendering functions
//!
//! # Example
//!
//! ```no_run
//! use projboard_github::GitHubClient;
//! use projboard_tui::{App, terminal};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     terminal::install_panic_hook();
//!     let mut terminal = terminal::setup_terminal()?;
//!
//!     let mut app = App::new("zeltenlabs", GitHubClient::new());
//!     let result = app.run(&mut terminal).await;
//!
//!     terminal::restore_terminal(&mut terminal)?;
//!     result
//! }
//! ```

pub mod app;
pub mod command;
pub mod event;
pub mod layout;
pub mod screen;
pub mod terminal;
pub mod widgets;

#[cfg(test)]
pub(crate) mod test_utils;

pub use app::{App, Screen};
pub use command::Command;
pub use layout::Viewport;
