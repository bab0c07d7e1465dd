//! HTTP client utilities
//!
//! Provides centralized HTTP client creation with consistent configuration.

use std::time::Duration;

use reqwest::Client;

use crate::collection::RequestError;
use crate::config;

/// Create an HTTP client with a short per-call deadline
///
/// The same deadline bounds connecting and the whole request, so a slow
/// API delays rendering by at most `timeout_secs` per call.
pub fn create_short_timeout_client(timeout_secs: u64) -> Result<Client, RequestError> {
    Client::builder()
        .user_agent(config::app::USER_AGENT)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(timeout_secs))
        .redirect(reqwest::redirect::Policy::limited(config::http::MAX_REDIRECTS))
        .build()
        .map_err(RequestError::Client)
}
