//! In-memory collection backend for tests

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ArtworkRecord, CollectionApi, ObjectSummary, RequestError};

#[derive(Debug, Default)]
pub struct FakeCollection {
    searches: HashMap<String, ObjectSummary>,
    records: HashMap<u64, ArtworkRecord>,
    failing: HashSet<u64>,
    search_fails: bool,
    calls: Mutex<Vec<String>>,
}

impl FakeCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, term: &str, total: u64, object_ids: Vec<u64>) -> Self {
        self.searches
            .insert(term.to_string(), ObjectSummary { total, object_ids });
        self
    }

    pub fn with_record(mut self, record: ArtworkRecord) -> Self {
        self.records.insert(record.id, record);
        self
    }

    /// Records with a title and a small image for each identifier
    pub fn with_titled(mut self, ids: &[u64]) -> Self {
        for &id in ids {
            let mut record = ArtworkRecord::bare(id);
            record.title = Some(format!("Artwork {}", id));
            record.primary_image_small = Some(format!("https://img.test/{}-small.jpg", id));
            self.records.insert(id, record);
        }
        self
    }

    pub fn failing_object(mut self, id: u64) -> Self {
        self.failing.insert(id);
        self
    }

    pub fn failing_search(mut self) -> Self {
        self.search_fails = true;
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record_call(&self, call: String) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl CollectionApi for FakeCollection {
    async fn search(&self, term: &str, images_only: bool) -> Result<ObjectSummary, RequestError> {
        self.record_call(format!("search:{}:{}", term, images_only));
        if self.search_fails {
            return Err(RequestError::Status {
                status: 503,
                url: "fake://search".to_string(),
            });
        }
        Ok(self.searches.get(term).cloned().unwrap_or_default())
    }

    async fn get_object(&self, id: u64) -> Result<ArtworkRecord, RequestError> {
        self.record_call(format!("object:{}", id));
        if self.failing.contains(&id) {
            return Err(RequestError::InvalidResponse(format!("broken object {}", id)));
        }
        self.records.get(&id).cloned().ok_or(RequestError::Status {
            status: 404,
            url: format!("fake://objects/{}", id),
        })
    }
}
