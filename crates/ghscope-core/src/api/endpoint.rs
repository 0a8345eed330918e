//! GitHub REST endpoints used by the controllers.

use std::fmt;

/// An API request, relative to the API base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    /// `search/users?q={query}&page={page}`
    SearchUsers {
        /// Search text
        query: String,
        /// 1-based page number
        page: u32,
    },
    /// `users/{username}`
    User {
        /// Login name
        username: String,
    },
    /// `users/{username}/repos`
    UserRepositories {
        /// Login name
        username: String,
    },
}

impl Endpoint {
    /// Build the relative path (and query string) for this endpoint.
    pub fn path(&self) -> String {
        match self {
            Self::SearchUsers { query, page } => format!(
                "search/users?q={}&page={page}",
                urlencoding::encode(query.trim())
            ),
            Self::User { username } => format!("users/{}", urlencoding::encode(username)),
            Self::UserRepositories { username } => {
                format!("users/{}/repos", urlencoding::encode(username))
            }
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
