//! Error types for search and browse interactions.

use thiserror::Error;

use crate::collection::RequestError;

/// Failures that end an interaction (or, for `FetchFailure`, one view)
#[derive(Debug, Error)]
pub enum ExploreError {
    /// The query was rejected before any request was made.
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The search call failed.
    #[error("Search failed: {0}")]
    SearchFailure(#[source] RequestError),

    /// A record needed by the detail view could not be fetched.
    #[error("Failed to load object {id}: {source}")]
    FetchFailure {
        id: u64,
        #[source]
        source: RequestError,
    },

    /// The identifier chosen for inspection is not in the current results.
    #[error("Object {0} is not among the displayed results")]
    InvalidSelection(u64),

    /// The HTTP client could not be set up.
    #[error(transparent)]
    Client(#[from] RequestError),

    /// Settings could not be loaded or were invalid.
    #[error("Settings error: {0}")]
    Settings(String),

    /// Writing output or reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering a view as JSON failed.
    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}
