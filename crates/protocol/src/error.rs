//! The error value delivered to screens.
//!
//! Fetch failures of every kind (request construction, transport, body
//! read, decode) collapse into a single [`FetchError`] carrying only a
//! message. Screens render it and stop.

use thiserror::Error;

/// An opaque fetch failure.
///
/// # Examples
///
/// ```
/// use projboard_protocol::FetchError;
///
/// let err = FetchError::new("connection refused");
/// assert_eq!(err.to_string(), "connection refused");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FetchError {
    message: String,
}

impl FetchError {
    /// Creates a fetch error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates a fetch error from any displayable error.
    #[must_use]
    pub fn from_error(err: &dyn std::error::Error) -> Self {
        Self::new(err.to_string())
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A specialized Result type for fetches as seen by the screens.
pub type FetchResult<T> = std::result::Result<T, FetchError>;
