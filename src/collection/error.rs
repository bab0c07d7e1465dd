//! Error types for the collection API client.

use thiserror::Error;

/// Errors that can occur when calling the collection API.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The HTTP client could not be built.
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network-level error during HTTP communication.
    #[error("Network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The per-call deadline elapsed.
    #[error("Request timed out")]
    Timeout,

    /// The API answered with a non-2xx status.
    #[error("HTTP {status} from {url}")]
    Status { status: u16, url: String },

    /// The body could not be read or decoded.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl RequestError {
    /// Classify an error raised while sending a request
    pub fn from_send(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            RequestError::Timeout
        } else {
            RequestError::Network(e)
        }
    }
}
