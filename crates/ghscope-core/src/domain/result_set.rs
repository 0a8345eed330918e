//! Accumulated search results for one query.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::user::{UserId, UserSummary};

/// One decoded page of `search/users` results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Users on this page, in relevance order
    pub items: Vec<UserSummary>,
    /// Total matches reported by the server for the query
    pub total_count: u64,
}

/// Results accumulated across pages for a single query.
///
/// Items keep server order: page order, then relevance order within a page.
/// Ids are unique; pages merged later never re-add an id already present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSet {
    /// Accumulated users
    pub items: Vec<UserSummary>,
    /// Total matches reported with page 1
    pub total_count: u64,
    /// Query that produced these results
    pub query: String,
    /// Highest page successfully merged (1-based)
    pub current_page: u32,
}

impl ResultSet {
    /// Start a result set from a page of a query.
    ///
    /// `page_number` is normally 1; a later page only starts a set when no
    /// results for the query were loaded before it.
    pub fn new(query: impl Into<String>, page_number: u32, page: SearchPage) -> Self {
        let mut seen = HashSet::with_capacity(page.items.len());
        let items = page
            .items
            .into_iter()
            .filter(|user| seen.insert(user.id))
            .collect();

        Self {
            items,
            total_count: page.total_count,
            query: query.into(),
            current_page: page_number,
        }
    }

    /// Append a continuation page.
    ///
    /// The page's `total_count` is ignored. Returns the number of users that
    /// were actually appended after dropping ids already present.
    pub fn merge_page(&mut self, page_number: u32, page: SearchPage) -> usize {
        let mut seen: HashSet<UserId> = self.items.iter().map(|user| user.id).collect();
        let before = self.items.len();

        self.items.extend(
            page.items
                .into_iter()
                .filter(|user| seen.insert(user.id)),
        );
        self.current_page = page_number;

        self.items.len() - before
    }

    /// The last accumulated user, if any.
    pub fn last(&self) -> Option<&UserSummary> {
        self.items.last()
    }

    /// Number of accumulated users.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing matched.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether a user id is already present.
    pub fn contains(&self, id: UserId) -> bool {
        self.items.iter().any(|user| user.id == id)
    }

    /// Whether the server reported more matches than are loaded.
    pub fn has_more(&self) -> bool {
        (self.items.len() as u64) < self.total_count
    }
}
