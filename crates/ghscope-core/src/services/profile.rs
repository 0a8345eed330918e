//! Profile and repository loader for a single user.
//!
//! Both requests start when the loader is created and resolve independently.
//! Each fires exactly once; there is no pagination or retry.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::{GENERIC_ERROR_MESSAGE, GithubApi, RequestResult};
use crate::domain::{LoadState, Profile, RepositorySummary};
use crate::events::{ProfileSnapshot, ViewEvent};
use crate::ports::ViewEventEmitter;

use super::interrupted;

type PendingRequest<T> = Option<JoinHandle<RequestResult<T>>>;

enum Completion {
    Profile(RequestResult<Profile>),
    Repositories(RequestResult<Vec<RepositorySummary>>),
}

/// Loads a user's profile and repository list.
pub struct ProfileLoader {
    username: String,
    emitter: Arc<dyn ViewEventEmitter>,
    profile: LoadState<Profile>,
    repositories: LoadState<Vec<RepositorySummary>>,
    error_message: Option<String>,
    pending_profile: PendingRequest<Profile>,
    pending_repositories: PendingRequest<Vec<RepositorySummary>>,
}

impl ProfileLoader {
    /// Create a loader and dispatch both requests.
    ///
    /// A blank username dispatches nothing; both loads fail immediately.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn start(
        username: impl Into<String>,
        api: &GithubApi,
        emitter: Arc<dyn ViewEventEmitter>,
    ) -> Self {
        let username = username.into().trim().to_string();
        let mut loader = Self {
            username,
            emitter,
            profile: LoadState::NotStarted,
            repositories: LoadState::NotStarted,
            error_message: None,
            pending_profile: None,
            pending_repositories: None,
        };

        if loader.username.is_empty() {
            warn!("profile requested for a blank username");
            loader.profile = LoadState::Failed(GENERIC_ERROR_MESSAGE.to_string());
            loader.repositories = LoadState::Failed(GENERIC_ERROR_MESSAGE.to_string());
            loader.error_message = Some(GENERIC_ERROR_MESSAGE.to_string());
            loader.publish();
            return loader;
        }

        let profile_api = api.clone();
        let profile_user = loader.username.clone();
        loader.pending_profile = Some(tokio::spawn(async move {
            profile_api.user_profile(&profile_user).await
        }));

        let repos_api = api.clone();
        let repos_user = loader.username.clone();
        loader.pending_repositories = Some(tokio::spawn(async move {
            repos_api.user_repositories(&repos_user).await
        }));

        debug!(username = %loader.username, "dispatched profile and repository requests");
        loader.profile = LoadState::Loading;
        loader.repositories = LoadState::Loading;
        loader.publish();
        loader
    }

    /// Wait for whichever request finishes first and apply it.
    ///
    /// Returns `false` once both requests have been applied.
    pub async fn process_next(&mut self) -> bool {
        let has_profile = self.pending_profile.is_some();
        let has_repositories = self.pending_repositories.is_some();
        if !has_profile && !has_repositories {
            return false;
        }

        let completion = {
            let Self {
                pending_profile,
                pending_repositories,
                ..
            } = self;

            tokio::select! {
                outcome = join_pending(pending_profile), if has_profile => Completion::Profile(outcome),
                outcome = join_pending(pending_repositories), if has_repositories => Completion::Repositories(outcome),
            }
        };

        match completion {
            Completion::Profile(outcome) => {
                self.pending_profile = None;
                self.apply_profile(outcome);
            }
            Completion::Repositories(outcome) => {
                self.pending_repositories = None;
                self.apply_repositories(outcome);
            }
        }
        true
    }

    /// Apply both outcomes, in arrival order.
    pub async fn settle(&mut self) {
        while self.process_next().await {}
    }

    /// Acknowledge the current error message.
    pub fn dismiss_error(&mut self) {
        if self.error_message.take().is_some() {
            self.publish();
        }
    }

    /// Login this loader was started for.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Profile load state.
    pub const fn profile(&self) -> &LoadState<Profile> {
        &self.profile
    }

    /// Repository list load state.
    pub const fn repositories(&self) -> &LoadState<Vec<RepositorySummary>> {
        &self.repositories
    }

    /// User-facing error text from the most recent failure of either load.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Whether both requests have been applied.
    pub const fn is_settled(&self) -> bool {
        self.pending_profile.is_none() && self.pending_repositories.is_none()
    }

    /// Clone of the published state.
    pub fn snapshot(&self) -> ProfileSnapshot {
        ProfileSnapshot {
            username: self.username.clone(),
            profile: self.profile.clone(),
            repositories: self.repositories.clone(),
            error_message: self.error_message.clone(),
        }
    }

    fn apply_profile(&mut self, outcome: RequestResult<Profile>) {
        match outcome {
            Ok(profile) => {
                debug!(username = %self.username, "profile loaded");
                self.profile = LoadState::Loaded(profile);
            }
            Err(err) => {
                warn!(username = %self.username, kind = ?err.kind(), error = %err, "profile request failed");
                self.profile = LoadState::Failed(GENERIC_ERROR_MESSAGE.to_string());
                self.error_message = Some(err.user_message().to_string());
            }
        }
        self.publish();
    }

    fn apply_repositories(&mut self, outcome: RequestResult<Vec<RepositorySummary>>) {
        match outcome {
            Ok(repositories) => {
                debug!(username = %self.username, count = repositories.len(), "repositories loaded");
                self.repositories = LoadState::Loaded(repositories);
            }
            Err(err) => {
                warn!(username = %self.username, kind = ?err.kind(), error = %err, "repository request failed");
                self.repositories = LoadState::Failed(GENERIC_ERROR_MESSAGE.to_string());
                self.error_message = Some(err.user_message().to_string());
            }
        }
        self.publish();
    }

    fn publish(&self) {
        self.emitter.emit(ViewEvent::Profile(self.snapshot()));
    }
}

/// Await a pending request handle; pends forever on an empty slot.
async fn join_pending<T>(slot: &mut PendingRequest<T>) -> RequestResult<T> {
    match slot.as_mut() {
        Some(handle) => handle.await.unwrap_or_else(|err| Err(interrupted(&err))),
        None => std::future::pending().await,
    }
}

impl Drop for ProfileLoader {
    fn drop(&mut self) {
        if let Some(handle) = self.pending_profile.take() {
            handle.abort();
        }
        if let Some(handle) = self.pending_repositories.take() {
            handle.abort();
        }
    }
}

impl std::fmt::Debug for ProfileLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProfileLoader")
            .field("username", &self.username)
            .field("profile", &self.profile)
            .field("repositories", &self.repositories)
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}
