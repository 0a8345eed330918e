//! GitHub REST response shapes.
//!
//! Only the fields the controllers need are declared; serde ignores the rest.

use serde::Deserialize;

use crate::domain::{Profile, RepositorySummary, SearchPage, UserId, UserSummary};

/// Response from `search/users`.
#[derive(Debug, Deserialize)]
pub struct SearchUsersResponse {
    pub total_count: u64,
    pub items: Vec<SearchUserItem>,
}

/// A single user item from the search results.
#[derive(Debug, Deserialize)]
pub struct SearchUserItem {
    pub login: String,
    pub id: UserId,
    pub avatar_url: String,
}

/// Response from `users/{username}`.
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub login: String,
    pub id: UserId,
    pub avatar_url: String,
    pub name: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    pub bio: Option<String>,
    pub public_repos: u32,
    pub followers: u32,
    pub following: u32,
}

/// One entry from `users/{username}/repos`.
#[derive(Debug, Deserialize)]
pub struct RepositoryItem {
    pub name: String,
    pub private: bool,
    pub description: Option<String>,
    pub language: Option<String>,
    pub updated_at: String,
}

impl From<SearchUserItem> for UserSummary {
    fn from(item: SearchUserItem) -> Self {
        Self {
            id: item.id,
            username: item.login,
            avatar_url: item.avatar_url,
        }
    }
}

impl From<SearchUsersResponse> for SearchPage {
    fn from(response: SearchUsersResponse) -> Self {
        Self {
            items: response.items.into_iter().map(UserSummary::from).collect(),
            total_count: response.total_count,
        }
    }
}

impl From<UserResponse> for Profile {
    fn from(user: UserResponse) -> Self {
        Self {
            username: user.login,
            display_name: user.name,
            avatar_url: user.avatar_url,
            company_name: user.company,
            location: user.location,
            bio: user.bio,
            id: user.id,
            public_repo_count: user.public_repos,
            follower_count: user.followers,
            following_count: user.following,
        }
    }
}

impl From<RepositoryItem> for RepositorySummary {
    fn from(repo: RepositoryItem) -> Self {
        Self {
            name: repo.name,
            is_private: repo.private,
            description: repo.description,
            primary_language: repo.language,
            last_updated_at: repo.updated_at,
        }
    }
}
