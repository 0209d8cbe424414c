//! GitHub Projects client for projboard.
//!
//! This crate talks to the GitHub GraphQL API to list an organization's
//! Projects v2 and to load a project's items, then projects those items
//! into board [`Task`](projboard_protocol::Task)s.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - [`GitHubClient`]: Issues the two fixed GraphQL queries
//! - [`query`]: The query documents and request body
//! - [`response`]: Wire shapes, including the field value and content unions
//! - [`project_to_tasks`]: Converts raw items into tasks
//! - [`Error`]: Error types for GitHub API operations
//!
//! # Authentication
//!
//! The bearer token is read from `GITHUB_OAUTH_TOKEN` on every call. A
//! missing token is not an error at this layer; the request goes out
//! unauthenticated and the server rejects it.
//!
//! # Pagination
//!
//! Only the first page is requested: 20 projects, 20 items per project,
//! 8 field values per item, 10 assignees per issue or pull request.
//!
//! # Examples
//!
//! ```no_run
//! use projboard_github::{GitHubClient, project_to_tasks};
//!
//! # async fn example() -> projboard_github::Result<()> {
//! let client = GitHubClient::new();
//!
//! let projects = client.fetch_projects("zeltenlabs").await?;
//! if let Some(project) = projects.first() {
//!     let items = client.fetch_project_items(&project.id).await?;
//!     let tasks = project_to_tasks(&items);
//!     println!("{} has {} tasks", project.title, tasks.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod item;
pub mod query;
pub mod response;

pub use client::{GITHUB_API_BASE, GitHubClient, TOKEN_ENV_VAR};
pub use error::{Error, Result};
pub use item::{item_to_task, project_to_tasks};
pub use response::{FieldValue, ItemContent, RawItem};
