//! Asynchronous fetches requested by the screens.
//!
//! A [`Command`] names a single remote call. The run loop spawns it on the
//! Tokio runtime; the spawned task sends exactly one [`Message`] back with
//! the result.

use projboard_github::{GitHubClient, project_to_tasks};
use projboard_protocol::{FetchError, Message};
use tokio::{sync::mpsc::UnboundedSender, task::JoinHandle};
use tracing::{debug, instrument};

/// A fetch to schedule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List the projects of an organization. Answered by
    /// [`Message::ProjectsLoaded`].
    LoadProjects {
        /// Organization login.
        organization: String,
    },
    /// Load the items of a project as tasks. Answered by
    /// [`Message::ItemsLoaded`].
    LoadProjectItems {
        /// Node ID of the project.
        project_id: String,
    },
}

impl Command {
    /// Runs the fetch and turns its outcome into a message.
    ///
    /// Failures are converted to [`FetchError`]; they have already been
    /// logged by the client.
    #[instrument(skip(client))]
    pub async fn execute(self, client: &GitHubClient) -> Message {
        match self {
            Self::LoadProjects { organization } => Message::ProjectsLoaded(
                client
                    .fetch_projects(&organization)
                    .await
                    .map_err(FetchError::from),
            ),
            Self::LoadProjectItems { project_id } => Message::ItemsLoaded(
                client
                    .fetch_project_items(&project_id)
                    .await
                    .map(|items| project_to_tasks(&items))
                    .map_err(FetchError::from),
            ),
        }
    }

    /// Spawns the fetch; its message is sent on `tx` when done.
    pub fn spawn(self, client: GitHubClient, tx: UnboundedSender<Message>) -> JoinHandle<()> {
        tokio::spawn(async move {
            let message = self.execute(&client).await;
            if tx.send(message).is_err() {
                debug!("event loop is gone, dropping fetch result");
            }
        })
    }
}
