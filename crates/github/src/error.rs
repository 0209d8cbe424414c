//! Error types for GitHub API operations.
//!
//! Every failure of a request is terminal for that request. The variants
//! exist for logging; callers are expected to treat them alike.

use projboard_protocol::FetchError;

/// Errors that can occur while talking to the GitHub GraphQL API.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The underlying HTTP client could not be constructed.
    #[error("failed to build GitHub client: {0}")]
    Build(#[source] octocrab::Error),

    /// The request failed in transport or while reading the response.
    #[error("GitHub API error: {0}")]
    Api(#[from] octocrab::Error),

    /// The response body did not have the expected shape.
    #[error("failed to decode GraphQL response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<Error> for FetchError {
    fn from(err: Error) -> Self {
        FetchError::from_error(&err)
    }
}

/// A specialized Result type for GitHub API operations.
pub type Result<T> = std::result::Result<T, Error>;
