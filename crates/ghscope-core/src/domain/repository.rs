//! Repository listing entries for a user profile.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A repository owned by a user.
///
/// `name` is unique within the owner and is used as the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    /// Repository name
    pub name: String,
    /// Whether the repository is private
    pub is_private: bool,
    /// Short description
    pub description: Option<String>,
    /// Primary language detected by GitHub
    pub primary_language: Option<String>,
    /// Last update timestamp as reported by the API (ISO 8601)
    pub last_updated_at: String,
}

impl RepositorySummary {
    /// Parse `last_updated_at` as a UTC timestamp.
    ///
    /// Returns `None` when the server sent something that is not RFC 3339.
    pub fn last_updated(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.last_updated_at)
            .ok()
            .map(|ts| ts.with_timezone(&Utc))
    }
}
