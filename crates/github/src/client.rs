//! GitHub GraphQL client implementation.
//!
//! This module provides the [`GitHubClient`] struct, which issues the two
//! fixed Projects v2 queries against the GitHub GraphQL endpoint.

use octocrab::Octocrab;
use projboard_protocol::ProjectSummary;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::{debug, instrument, warn};

use crate::error::{Error, Result};
use crate::query::{project_items_query, projects_query, request_body};
use crate::response::{RawItem, decode_project_items, decode_projects};

/// Base URI of the public GitHub API. Queries are posted to `/graphql`.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_OAUTH_TOKEN";

/// Reads the bearer token from [`TOKEN_ENV_VAR`].
///
/// A missing or non-UTF-8 variable yields an empty token; the request is
/// then sent anyway and rejected by the server.
#[must_use]
pub fn token_from_env() -> SecretString {
    SecretString::from(std::env::var(TOKEN_ENV_VAR).unwrap_or_default())
}

/// GitHub GraphQL client for Projects v2.
///
/// The client holds no connection state. Every call reads the token from
/// the environment and builds a fresh octocrab instance, so a token
/// exported while the program runs is picked up by the next fetch.
///
/// # Security
///
/// The token is kept in a [`SecretString`] and only exposed when handed to
/// octocrab.
///
/// # Examples
///
/// ```no_run
/// use projboard_github::GitHubClient;
///
/// # async fn example() -> projboard_github::Result<()> {
/// let client = GitHubClient::new();
/// let projects = client.fetch_projects("rust-lang").await?;
/// for project in &projects {
///     println!("{}: {}", project.id, project.title);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GitHubClient {
    base_uri: String,
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

impl GitHubClient {
    /// Creates a client for the public GitHub API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_uri(GITHUB_API_BASE)
    }

    /// Creates a client for a different API base URI.
    ///
    /// Useful for GitHub Enterprise hosts and for tests.
    #[must_use]
    pub fn with_base_uri(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
        }
    }

    /// Returns the API base URI this client posts to.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Lists the first page of Projects v2 owned by an organization.
    ///
    /// Projects are returned in server order.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built, the request fails,
    /// or the response is not a projects listing (for instance because the
    /// organization does not exist or the token was rejected).
    #[instrument(skip(self), fields(base_uri = %self.base_uri))]
    pub async fn fetch_projects(&self, organization: &str) -> Result<Vec<ProjectSummary>> {
        let body = self.execute(projects_query(organization)).await?;
        let projects = decode_projects(body).inspect_err(|e| {
            warn!(error = %e, "failed to decode projects response");
        })?;
        debug!(count = projects.len(), "fetched projects");
        Ok(projects)
    }

    /// Loads the first page of items of a project.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be built, the request fails,
    /// or the response is not an item listing.
    #[instrument(skip(self), fields(base_uri = %self.base_uri))]
    pub async fn fetch_project_items(&self, project_id: &str) -> Result<Vec<RawItem>> {
        let body = self.execute(project_items_query(project_id)).await?;
        let items = decode_project_items(body).inspect_err(|e| {
            warn!(error = %e, "failed to decode project items response");
        })?;
        debug!(count = items.len(), "fetched project items");
        Ok(items)
    }

    /// Posts a query document and returns the raw JSON response.
    async fn execute(&self, query: String) -> Result<Value> {
        let octocrab = self.build().inspect_err(|e| {
            warn!(error = %e, "failed to build GitHub client");
        })?;

        debug!(bytes = query.len(), "posting GraphQL query");
        octocrab
            .graphql::<Value>(&request_body(query))
            .await
            .map_err(Error::Api)
            .inspect_err(|e| warn!(error = %e, "GraphQL request failed"))
    }

    /// Builds an octocrab instance authenticated with the current token.
    fn build(&self) -> Result<Octocrab> {
        let token = token_from_env();
        if token.expose_secret().is_empty() {
            debug!("{TOKEN_ENV_VAR} is not set, sending an empty bearer token");
        }

        Octocrab::builder()
            .base_uri(self.base_uri.as_str())
            .map_err(Error::Build)?
            .personal_token(token.expose_secret())
            .build()
            .map_err(Error::Build)
    }
}
