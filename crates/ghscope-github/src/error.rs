//! Errors raised while building the gateway.
//!
//! Request-time failures are reported through the core `TransportError`
//! instead, so they can flow through response validation.

use thiserror::Error;

/// Result type alias for gateway construction.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors related to gateway construction.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// The configured base URL could not be parsed.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// The URL as configured
        url: String,
        /// Parser error
        #[source]
        source: ::url::ParseError,
    },

    /// The base URL cannot carry relative paths (e.g. `mailto:`).
    #[error("Base URL '{url}' cannot be used as an API root")]
    UnsupportedBaseUrl {
        /// The URL as configured
        url: String,
    },

    /// The HTTP client could not be built.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
