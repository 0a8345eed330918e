//! Paginated user search controller.
//!
//! The controller accumulates pages of `search/users` results for one query
//! at a time:
//!
//! ```text
//!   search("octo") ──► page 1 replaces results
//!   fetch_next()   ──► page n+1 appended (ids already present are skipped)
//!   search("cat")  ──► in-flight "octo" request aborted, page 1 of "cat"
//! ```
//!
//! At most one request is in flight. `fetch` calls made while one is
//! outstanding are dropped, not queued; the presentation layer re-triggers
//! them on its next end-of-list event.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::api::{GENERIC_ERROR_MESSAGE, GithubApi, RequestResult};
use crate::domain::{LoadState, ResultSet, SearchPage, UserSummary};
use crate::events::{SearchSnapshot, ViewEvent};
use crate::ports::ViewEventEmitter;

use super::interrupted;

/// The request currently in flight.
struct PendingSearch {
    query: String,
    page: u32,
    handle: JoinHandle<RequestResult<SearchPage>>,
}

/// Page accumulator for GitHub user search.
///
/// Requests are spawned on the current Tokio runtime; their results are
/// applied by [`SearchController::process_next`].
pub struct SearchController {
    api: GithubApi,
    emitter: Arc<dyn ViewEventEmitter>,
    results: LoadState<ResultSet>,
    error_message: Option<String>,
    pending: Option<PendingSearch>,
}

impl SearchController {
    /// Create an idle controller.
    pub fn new(api: GithubApi, emitter: Arc<dyn ViewEventEmitter>) -> Self {
        Self {
            api,
            emitter,
            results: LoadState::NotStarted,
            error_message: None,
            pending: None,
        }
    }

    /// Submit a query from the search box.
    ///
    /// Always targets page 1. A request still running for a different query
    /// is aborted and never applied; a request for the same query makes
    /// this call a no-op. Returns whether a request was dispatched.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn search(&mut self, query: &str) -> bool {
        let query = query.trim();
        if query.is_empty() {
            debug!("ignoring empty search query");
            return false;
        }

        if let Some(pending) = &self.pending {
            if pending.query == query {
                debug!(query, "search for this query already in flight");
                return false;
            }
            debug!(stale = %pending.query, query, "replacing in-flight search");
            self.cancel_pending();
        }

        self.fetch(query, 1)
    }

    /// Request one page of results for `query`.
    ///
    /// Dropped (returns `false`) while another request is in flight or when
    /// the query is empty. Page 1 replaces the result set on success; later
    /// pages are appended.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    pub fn fetch(&mut self, query: &str, page: u32) -> bool {
        if let Some(pending) = &self.pending {
            debug!(
                query,
                page,
                pending_query = %pending.query,
                pending_page = pending.page,
                "search already in flight, dropping request"
            );
            return false;
        }

        let query = query.trim();
        if query.is_empty() {
            debug!("ignoring empty search query");
            return false;
        }

        let page = page.max(1);
        let api = self.api.clone();
        let request_query = query.to_string();
        let handle = tokio::spawn(async move { api.search_users(&request_query, page).await });

        debug!(query, page, "dispatched user search");
        self.pending = Some(PendingSearch {
            query: query.to_string(),
            page,
            handle,
        });

        if !self.results.is_loaded() {
            self.results = LoadState::Loading;
        }
        self.publish();
        true
    }

    /// Request the page after the last merged one for the current query.
    ///
    /// Does nothing when no result set has been loaded yet.
    pub fn fetch_next(&mut self) -> bool {
        let Some(set) = self.results.loaded() else {
            debug!("no results loaded, nothing to continue");
            return false;
        };

        let query = set.query.clone();
        let next_page = set.current_page.saturating_add(1);
        self.fetch(&query, next_page)
    }

    /// Whether `item` is the last loaded user.
    ///
    /// Evaluated for every rendered row, so it only compares ids.
    pub fn reached_end(&self, item: &UserSummary) -> bool {
        self.results
            .loaded()
            .and_then(ResultSet::last)
            .is_some_and(|last| last.id == item.id)
    }

    /// Wait for the in-flight request and apply its outcome.
    ///
    /// Returns `false` immediately when nothing is in flight. Cancel-safe:
    /// if the returned future is dropped, the request stays pending.
    pub async fn process_next(&mut self) -> bool {
        let Some(pending) = self.pending.as_mut() else {
            return false;
        };

        let joined = (&mut pending.handle).await;
        let Some(PendingSearch { query, page, .. }) = self.pending.take() else {
            return false;
        };

        let outcome = joined.unwrap_or_else(|err| Err(interrupted(&err)));
        self.apply(&query, page, outcome);
        true
    }

    /// Abort any request and forget all results.
    pub fn clear(&mut self) {
        self.cancel_pending();
        self.results = LoadState::NotStarted;
        self.error_message = None;
        self.publish();
    }

    /// Acknowledge the current error message.
    pub fn dismiss_error(&mut self) {
        if self.error_message.take().is_some() {
            self.publish();
        }
    }

    /// Current results.
    pub const fn results(&self) -> &LoadState<ResultSet> {
        &self.results
    }

    /// The loaded result set, if any.
    pub const fn result_set(&self) -> Option<&ResultSet> {
        self.results.loaded()
    }

    /// Whether a request is outstanding.
    pub const fn is_in_flight(&self) -> bool {
        self.pending.is_some()
    }

    /// User-facing error text from the last failed request.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Clone of the published state.
    pub fn snapshot(&self) -> SearchSnapshot {
        SearchSnapshot {
            results: self.results.clone(),
            in_flight: self.is_in_flight(),
            error_message: self.error_message.clone(),
        }
    }

    fn apply(&mut self, query: &str, page: u32, outcome: RequestResult<SearchPage>) {
        match outcome {
            Ok(search_page) => {
                let continues_current = page > 1
                    && self
                        .results
                        .loaded()
                        .is_some_and(|set| set.query == query);

                if continues_current {
                    if let Some(set) = self.results.loaded_mut() {
                        let received = search_page.items.len();
                        let appended = set.merge_page(page, search_page);
                        debug!(query, page, received, appended, total = set.len(), "merged search page");
                    }
                } else {
                    let set = ResultSet::new(query, page, search_page);
                    debug!(
                        query,
                        page,
                        total = set.len(),
                        total_count = set.total_count,
                        "loaded search results"
                    );
                    self.results = LoadState::Loaded(set);
                }
            }
            Err(err) => {
                warn!(query, page, kind = ?err.kind(), error = %err, "user search failed");
                if !self.results.is_loaded() {
                    self.results = LoadState::Failed(GENERIC_ERROR_MESSAGE.to_string());
                }
                self.error_message = Some(err.user_message().to_string());
            }
        }
        self.publish();
    }

    fn cancel_pending(&mut self) {
        if let Some(pending) = self.pending.take() {
            pending.handle.abort();
        }
    }

    fn publish(&self) {
        self.emitter.emit(ViewEvent::Search(self.snapshot()));
    }
}

impl Drop for SearchController {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

impl std::fmt::Debug for SearchController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("results", &self.results)
            .field("in_flight", &self.is_in_flight())
            .field("error_message", &self.error_message)
            .finish_non_exhaustive()
    }
}
