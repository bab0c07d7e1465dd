//! Collection API module
//!
//! Typed access to the Met Collection API search and object endpoints.

mod client;
mod error;
#[cfg(test)]
pub mod fake;
mod memo;
mod models;

pub use client::MetClient;
pub use error::RequestError;
pub use models::{ArtworkRecord, ObjectSummary};

use async_trait::async_trait;

/// Read-only operations the renderer needs from a collection backend
#[async_trait]
pub trait CollectionApi: Send + Sync {
    /// Find identifiers matching a free-text term
    ///
    /// `images_only` is passed through to the backend unchanged.
    async fn search(&self, term: &str, images_only: bool) -> Result<ObjectSummary, RequestError>;

    /// Fetch the metadata record for one identifier
    async fn get_object(&self, id: u64) -> Result<ArtworkRecord, RequestError>;
}
