//! Request failure types.
//!
//! These errors stay inside the controllers. Presentation code only ever
//! sees [`GENERIC_ERROR_MESSAGE`].

use thiserror::Error;

use crate::ports::TransportError;

/// The single user-visible message for every failure kind.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

/// Result type alias for API requests.
pub type RequestResult<T> = Result<T, RequestFailure>;

/// Why a request did not produce a value.
#[derive(Debug, Error)]
pub enum RequestFailure {
    /// No HTTP response was received.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The response carried an empty body.
    #[error("Response contained no data")]
    NoData,

    /// The response status was outside 200..=299.
    #[error("Unexpected HTTP status {status}")]
    BadStatus {
        /// HTTP status code
        status: u16,
    },

    /// The body was not the expected JSON shape.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Fieldless classification of a [`RequestFailure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// See [`RequestFailure::Transport`]
    Transport,
    /// See [`RequestFailure::NoData`]
    NoData,
    /// See [`RequestFailure::BadStatus`]
    BadStatus,
    /// See [`RequestFailure::Decode`]
    DecodeFailure,
}

impl RequestFailure {
    /// Classify this failure.
    pub const fn kind(&self) -> FailureKind {
        match self {
            Self::Transport(_) => FailureKind::Transport,
            Self::NoData => FailureKind::NoData,
            Self::BadStatus { .. } => FailureKind::BadStatus,
            Self::Decode(_) => FailureKind::DecodeFailure,
        }
    }

    /// The message shown to the user, identical for every kind.
    pub const fn user_message(&self) -> &'static str {
        GENERIC_ERROR_MESSAGE
    }
}
