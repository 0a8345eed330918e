//! User types returned by search and profile lookups.

use serde::{Deserialize, Serialize};

/// Server-assigned, stable GitHub account id.
pub type UserId = u64;

/// A single user row in search results.
///
/// Identity is `id`; two summaries with the same id describe the same account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    /// GitHub account id
    pub id: UserId,
    /// Login name (e.g. "octocat")
    pub username: String,
    /// Avatar image URL
    pub avatar_url: String,
}

impl UserSummary {
    /// Create a new user summary.
    pub fn new(id: UserId, username: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            avatar_url: avatar_url.into(),
        }
    }
}

/// Full profile of a single GitHub user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Login name
    pub username: String,
    /// Display name, if the user set one
    pub display_name: Option<String>,
    /// Avatar image URL
    pub avatar_url: String,
    /// Company, if public
    pub company_name: Option<String>,
    /// Location, if public
    pub location: Option<String>,
    /// Profile bio, if set
    pub bio: Option<String>,
    /// GitHub account id
    pub id: UserId,
    /// Number of public repositories
    pub public_repo_count: u32,
    /// Number of followers
    pub follower_count: u32,
    /// Number of accounts this user follows
    pub following_count: u32,
}

impl Profile {
    /// Name to show in headers: the display name, falling back to the login.
    pub fn title(&self) -> &str {
        self.display_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(&self.username)
    }
}
