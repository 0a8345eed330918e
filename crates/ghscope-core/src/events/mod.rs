//! View events published by the controllers.
//!
//! Every mutation of a controller emits a full snapshot of its published
//! state, so observers never need to reach back into the controller.
//!
//! # Wire Format
//!
//! Events are serialized with a `type` tag:
//!
//! ```json
//! { "type": "search", "results": { "state": "loading" }, "inFlight": true, "errorMessage": null }
//! ```

use serde::{Deserialize, Serialize};

use crate::domain::{LoadState, Profile, RepositorySummary, ResultSet};

/// Published state of a `SearchController`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSnapshot {
    /// Accumulated results for the current query.
    pub results: LoadState<ResultSet>,
    /// Whether a search request is outstanding.
    pub in_flight: bool,
    /// User-facing error text, if the last request failed.
    pub error_message: Option<String>,
}

/// Published state of a `ProfileLoader`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSnapshot {
    /// Login the loader was started for.
    pub username: String,
    /// Profile details.
    pub profile: LoadState<Profile>,
    /// Public repositories.
    pub repositories: LoadState<Vec<RepositorySummary>>,
    /// User-facing error text; shared by both loads, last writer wins.
    pub error_message: Option<String>,
}

/// Events emitted to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ViewEvent {
    /// The search controller's state changed.
    Search(SearchSnapshot),
    /// A profile loader's state changed.
    Profile(ProfileSnapshot),
}
