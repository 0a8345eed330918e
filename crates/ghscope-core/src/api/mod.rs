//! GitHub REST API facade.
//!
//! Turns endpoint requests into domain values: the transport gateway fetches
//! raw bytes, [`validate_response`] classifies the outcome, and the fixed
//! JSON shapes in `wire` are decoded and converted to domain types.

mod client;
mod endpoint;
mod error;
mod validate;
mod wire;

pub use client::GithubApi;
pub use endpoint::Endpoint;
pub use error::{FailureKind, GENERIC_ERROR_MESSAGE, RequestFailure, RequestResult};
pub use validate::validate_response;
