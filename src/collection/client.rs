//! Met Collection API client implementation.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::Settings;
use crate::utils::create_short_timeout_client;
use crate::{log_debug, log_error, log_info};

use super::memo::{CachedResponse, CallKey, ResponseCache};
use super::{ArtworkRecord, CollectionApi, ObjectSummary, RequestError};

const MODULE: &str = "collection";

/// Client for the Met Collection API with per-process memoization
#[derive(Debug)]
pub struct MetClient {
    http_client: Client,
    base_url: String,
    cache: ResponseCache,
}

impl MetClient {
    /// Create a client for `base_url` with the given per-call deadline
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self, RequestError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            http_client: create_short_timeout_client(timeout_secs)?,
            base_url,
            cache: ResponseCache::new(),
        })
    }

    pub fn from_settings(settings: &Settings) -> Result<Self, RequestError> {
        Self::new(settings.base_url.clone(), settings.timeout_secs)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Number of distinct calls answered so far
    pub fn cached_calls(&self) -> usize {
        self.cache.len()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, RequestError> {
        log_debug!(MODULE, "GET {} {:?}", url, query);

        let response = self
            .http_client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|e| {
                log_error!(MODULE, "Request to {} failed: {}", url, e);
                RequestError::from_send(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            log_error!(MODULE, "HTTP {} from {}", status, url);
            return Err(RequestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await.map_err(|e| {
            log_error!(MODULE, "Failed to read response body from {}: {}", url, e);
            RequestError::InvalidResponse(format!("Failed to read body: {}", e))
        })?;

        serde_json::from_str(&body).map_err(|e| {
            log_error!(MODULE, "Failed to parse JSON from {}: {}", url, e);
            RequestError::InvalidResponse(format!("JSON parse error: {}", e))
        })
    }
}

#[async_trait]
impl CollectionApi for MetClient {
    async fn search(&self, term: &str, images_only: bool) -> Result<ObjectSummary, RequestError> {
        if let Some(summary) = self.cache.search(term, images_only) {
            log_debug!(MODULE, "Cache hit for search '{}'", term);
            return Ok(summary);
        }

        let url = format!("{}/search", self.base_url);
        let mut query = vec![("q", term)];
        if images_only {
            query.push(("hasImages", "true"));
        }

        let summary: ObjectSummary = self.get_json(&url, &query).await?;
        log_info!(
            MODULE,
            "Search '{}' returned {} results ({} ids)",
            term,
            summary.total,
            summary.object_ids.len()
        );

        self.cache.insert(
            CallKey::Search {
                term: term.to_string(),
                images_only,
            },
            CachedResponse::Search(summary.clone()),
        );
        Ok(summary)
    }

    async fn get_object(&self, id: u64) -> Result<ArtworkRecord, RequestError> {
        if let Some(record) = self.cache.object(id) {
            log_debug!(MODULE, "Cache hit for object {}", id);
            return Ok(record);
        }

        let url = format!("{}/objects/{}", self.base_url, id);
        let record: ArtworkRecord = self.get_json(&url, &[]).await?;
        log_debug!(MODULE, "Fetched object {}", id);

        self.cache
            .insert(CallKey::Object { id }, CachedResponse::Object(record.clone()));
        Ok(record)
    }
}
