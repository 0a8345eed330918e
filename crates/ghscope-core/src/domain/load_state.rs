//! Load state for asynchronously fetched values.

use serde::{Deserialize, Serialize};

/// Lifecycle of a value fetched from the network.
///
/// Serialized with a `state` tag so frontends can switch on it:
///
/// ```json
/// { "state": "loaded", "value": { ... } }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum LoadState<T> {
    /// No request has been issued yet.
    NotStarted,
    /// A request is outstanding and there is nothing to show yet.
    Loading,
    /// The value was fetched successfully.
    Loaded(T),
    /// The last request failed; carries the user-facing reason.
    Failed(String),
}

// Written by hand: a derive would require `T: Default`.
impl<T> Default for LoadState<T> {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl<T> LoadState<T> {
    /// Borrow the loaded value, if any.
    pub const fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Mutably borrow the loaded value, if any.
    pub fn loaded_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Check whether a value is available.
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Check whether a request is outstanding with nothing to show.
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// The failure reason, if the last request failed.
    pub fn failure(&self) -> Option<&str> {
        match self {
            Self::Failed(reason) => Some(reason),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_started() {
        let state: LoadState<u32> = LoadState::default();
        assert_eq!(state, LoadState::NotStarted);
        assert!(state.loaded().is_none());
    }

    #[test]
    fn test_accessors() {
        let mut state = LoadState::Loaded(3);
        assert!(state.is_loaded());
        *state.loaded_mut().unwrap() += 1;
        assert_eq!(state.loaded(), Some(&4));

        let failed: LoadState<u32> = LoadState::Failed("boom".to_string());
        assert_eq!(failed.failure(), Some("boom"));
        assert!(!failed.is_loading());
        assert!(LoadState::<u32>::Loading.is_loading());
    }

    #[test]
    fn test_serialized_shape() {
        let json = serde_json::to_value(LoadState::Loaded(7)).unwrap();
        assert_eq!(json["state"], "loaded");
        assert_eq!(json["value"], 7);

        let json = serde_json::to_value(LoadState::<u32>::NotStarted).unwrap();
        assert_eq!(json["state"], "not_started");
    }
}
