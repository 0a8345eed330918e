//! Transport gateway port.
//!
//! The gateway performs a single HTTPS GET against the GitHub API and
//! reports what happened on the wire, without judging it. Classifying the
//! outcome is the job of [`crate::api::validate_response`].

use async_trait::async_trait;
use thiserror::Error;

/// Raw outcome of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body bytes (possibly empty)
    pub body: Vec<u8>,
}

impl RawResponse {
    /// Create a raw response.
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// The request never produced an HTTP response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// The request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// Could not connect to the server.
    #[error("Connection failed: {message}")]
    Connect {
        /// Description of the connection failure
        message: String,
    },

    /// Any other failure while sending or reading the request.
    #[error("Request failed: {message}")]
    Request {
        /// Description of the failure
        message: String,
    },

    /// The task running the request panicked or was aborted.
    #[error("Request interrupted: {message}")]
    Interrupted {
        /// Description of the interruption
        message: String,
    },
}

/// Port trait for executing GET requests against the GitHub API.
///
/// `path` is relative to the API base URL and may carry a query string,
/// e.g. `search/users?q=octocat&page=2`. Implementations must not retry and
/// must not interpret status codes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TransportGateway: Send + Sync {
    /// Perform a GET request.
    async fn get(&self, path: &str) -> Result<RawResponse, TransportError>;
}
