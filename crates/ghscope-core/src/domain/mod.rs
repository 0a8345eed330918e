//! Domain types for GitHub user search and profile browsing.
//!
//! These types are the core-owned representation of GitHub data. They are
//! decoupled from the REST wire format (see `api::wire`) and are safe to hand
//! to presentation code: Clone + Debug + Serialize with no infrastructure
//! dependencies.

mod load_state;
mod repository;
mod result_set;
mod user;

pub use load_state::LoadState;
pub use repository::RepositorySummary;
pub use result_set::{ResultSet, SearchPage};
pub use user::{Profile, UserId, UserSummary};
