//! View-model controllers.
//!
//! Both controllers follow the same pattern: dispatch a request as a tokio
//! task, keep its handle, and apply the outcome only when the owner awaits
//! `process_next()`. All state mutation happens through `&mut self` on the
//! owner's context, and every mutation publishes a snapshot.

mod profile;
mod search;

pub use profile::ProfileLoader;
pub use search::SearchController;

use tokio::task::JoinError;

use crate::api::RequestFailure;
use crate::ports::TransportError;

/// Map a failed request task to a transport failure.
fn interrupted(err: &JoinError) -> RequestFailure {
    TransportError::Interrupted {
        message: err.to_string(),
    }
    .into()
}
