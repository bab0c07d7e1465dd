//! Per-process memoization of API calls
//!
//! An explicit table from (call, arguments) to the successful result.
//! Entries are written once and never evicted; failures are not stored.

use std::collections::HashMap;
use std::sync::Mutex;

use super::models::{ArtworkRecord, ObjectSummary};

/// Identity of one outbound call
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CallKey {
    Search { term: String, images_only: bool },
    Object { id: u64 },
}

/// A stored successful response
#[derive(Debug, Clone)]
pub enum CachedResponse {
    Search(ObjectSummary),
    Object(ArtworkRecord),
}

/// Memoization table shared by every call made through one client
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<CallKey, CachedResponse>>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CallKey) -> Option<CachedResponse> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    pub fn insert(&self, key: CallKey, response: CachedResponse) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.entry(key).or_insert(response);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    /// Cached search result for the given arguments
    pub fn search(&self, term: &str, images_only: bool) -> Option<ObjectSummary> {
        let key = CallKey::Search {
            term: term.to_string(),
            images_only,
        };
        match self.get(&key)? {
            CachedResponse::Search(summary) => Some(summary),
            CachedResponse::Object(_) => None,
        }
    }

    /// Cached record for the given identifier
    pub fn object(&self, id: u64) -> Option<ArtworkRecord> {
        match self.get(&CallKey::Object { id })? {
            CachedResponse::Object(record) => Some(record),
            CachedResponse::Search(_) => None,
        }
    }
}
