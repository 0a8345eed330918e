//! The API facade used by the controllers.

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::domain::{Profile, RepositorySummary, SearchPage};
use crate::ports::TransportGateway;

use super::endpoint::Endpoint;
use super::error::RequestResult;
use super::validate::validate_response;
use super::wire::{RepositoryItem, SearchUsersResponse, UserResponse};

/// Typed access to the GitHub endpoints, over any [`TransportGateway`].
///
/// Cheap to clone; clones share the gateway.
#[derive(Clone)]
pub struct GithubApi {
    gateway: Arc<dyn TransportGateway>,
}

impl GithubApi {
    /// Create an API facade over a gateway.
    pub fn new(gateway: Arc<dyn TransportGateway>) -> Self {
        Self { gateway }
    }

    /// Fetch one page of `search/users` results.
    pub async fn search_users(&self, query: &str, page: u32) -> RequestResult<SearchPage> {
        let endpoint = Endpoint::SearchUsers {
            query: query.to_string(),
            page,
        };
        let response: SearchUsersResponse = self.get_json(&endpoint).await?;
        Ok(response.into())
    }

    /// Fetch a user's profile.
    pub async fn user_profile(&self, username: &str) -> RequestResult<Profile> {
        let endpoint = Endpoint::User {
            username: username.to_string(),
        };
        let response: UserResponse = self.get_json(&endpoint).await?;
        Ok(response.into())
    }

    /// Fetch a user's public repositories (first page as served by GitHub).
    pub async fn user_repositories(&self, username: &str) -> RequestResult<Vec<RepositorySummary>> {
        let endpoint = Endpoint::UserRepositories {
            username: username.to_string(),
        };
        let response: Vec<RepositoryItem> = self.get_json(&endpoint).await?;
        Ok(response.into_iter().map(RepositorySummary::from).collect())
    }

    async fn get_json<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> RequestResult<T> {
        let outcome = self.gateway.get(&endpoint.path()).await;
        let body = validate_response(outcome)?;
        Ok(serde_json::from_slice(&body)?)
    }
}

impl std::fmt::Debug for GithubApi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GithubApi").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FailureKind;
    use crate::ports::transport::MockTransportGateway;
    use crate::ports::{RawResponse, TransportError};
    use serde_json::json;

    fn api_returning(
        expected_path: &'static str,
        outcome: Result<RawResponse, TransportError>,
    ) -> GithubApi {
        let mut gateway = MockTransportGateway::new();
        gateway
            .expect_get()
            .withf(move |path| path == expected_path)
            .times(1)
            .returning(move |_| outcome.clone());
        GithubApi::new(Arc::new(gateway))
    }

    fn json_body(value: &serde_json::Value) -> RawResponse {
        RawResponse::new(200, value.to_string())
    }

    #[test]
    fn test_search_users_decodes_page() {
        let api = api_returning(
            "search/users?q=octocat&page=1",
            Ok(json_body(&json!({
                "total_count": 1,
                "items": [{"login": "octocat", "id": 1, "avatar_url": "https://a/1"}]
            }))),
        );

        let page = tokio_test::block_on(api.search_users("octocat", 1)).unwrap();
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].username, "octocat");
    }

    #[tokio::test]
    async fn test_user_profile_bad_status() {
        let api = api_returning(
            "users/ghost-user",
            Ok(RawResponse::new(404, r#"{"message":"Not Found"}"#)),
        );

        let err = api.user_profile("ghost-user").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::BadStatus);
    }

    #[tokio::test]
    async fn test_user_repositories_decode_failure() {
        let api = api_returning(
            "users/octocat/repos",
            Ok(json_body(&json!({"not": "an array"}))),
        );

        let err = api.user_repositories("octocat").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::DecodeFailure);
    }

    #[tokio::test]
    async fn test_user_repositories_decodes_list() {
        let api = api_returning(
            "users/octocat/repos",
            Ok(json_body(&json!([
                {"name": "Hello-World", "private": false, "description": null,
                 "language": null, "updated_at": "2011-01-26T19:14:43Z"},
                {"name": "secret", "private": true, "description": "x",
                 "language": "Rust", "updated_at": "2020-05-01T10:00:00Z"}
            ]))),
        );

        let repos = api.user_repositories("octocat").await.unwrap();
        assert_eq!(repos.len(), 2);
        assert!(repos[1].is_private);
    }

    #[tokio::test]
    async fn test_transport_error_propagates() {
        let api = api_returning("users/octocat", Err(TransportError::Timeout));

        let err = api.user_profile("octocat").await.unwrap_err();
        assert_eq!(err.kind(), FailureKind::Transport);
    }
}
