//! Core of ghscope: GitHub user search and profile browsing.
//!
//! This crate owns the domain types, the ports to infrastructure, and the
//! two view-model controllers:
//!
//! - [`SearchController`] accumulates paginated `search/users` results for
//!   one query at a time and guards against overlapping requests.
//! - [`ProfileLoader`] loads a user's profile and repository list as two
//!   independent one-shot requests.
//!
//! Network access goes through the [`TransportGateway`] port; the reqwest
//! implementation lives in `ghscope-github`. Controllers publish state
//! snapshots through the [`ViewEventEmitter`] port.

#![deny(unused_crate_dependencies)]

pub mod api;
pub mod domain;
pub mod events;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;

// Re-export commonly used types for convenience
pub use api::{
    Endpoint, FailureKind, GENERIC_ERROR_MESSAGE, GithubApi, RequestFailure, RequestResult,
    validate_response,
};
pub use domain::{
    LoadState, Profile, RepositorySummary, ResultSet, SearchPage, UserId, UserSummary,
};
pub use events::{ProfileSnapshot, SearchSnapshot, ViewEvent};
pub use ports::{
    ChannelEmitter, NoopEmitter, RawResponse, TransportError, TransportGateway, ViewEventEmitter,
};
pub use services::{ProfileLoader, SearchController};
