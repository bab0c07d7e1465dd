//! Single artwork detail view

use serde::Serialize;

use crate::collection::{ArtworkRecord, CollectionApi};
use crate::config::defaults;
use crate::error::ExploreError;
use crate::log_info;
use crate::utils::non_empty;

const MODULE: &str = "render::detail";

/// Full display of one artwork, including fields the grid leaves out
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub object_id: u64,
    pub title: String,
    /// Full-size image, falling back to the small one
    pub image_url: Option<String>,
    pub artist: String,
    pub date: String,
    pub medium: String,
    pub dimensions: String,
    pub object_url: Option<String>,
}

impl DetailView {
    pub fn from_record(record: &ArtworkRecord) -> Self {
        let or_na = |value: &Option<String>| {
            non_empty(value.as_deref())
                .unwrap_or(defaults::NOT_AVAILABLE)
                .to_string()
        };

        Self {
            object_id: record.id,
            title: non_empty(record.title.as_deref())
                .unwrap_or(defaults::TITLE)
                .to_string(),
            image_url: non_empty(record.primary_image.as_deref())
                .or_else(|| non_empty(record.primary_image_small.as_deref()))
                .map(str::to_string),
            artist: non_empty(record.artist_display_name.as_deref())
                .unwrap_or(defaults::ARTIST)
                .to_string(),
            date: or_na(&record.object_date),
            medium: or_na(&record.medium),
            dimensions: or_na(&record.dimensions),
            object_url: non_empty(record.object_url.as_deref()).map(str::to_string),
        }
    }
}

/// Fetch (or reuse the memoized) record and build its detail view
///
/// A failed fetch is fatal to this view only.
pub async fn build_detail_view<A>(api: &A, id: u64) -> Result<DetailView, ExploreError>
where
    A: CollectionApi + ?Sized,
{
    let record = api
        .get_object(id)
        .await
        .map_err(|source| ExploreError::FetchFailure { id, source })?;

    log_info!(MODULE, "Showing details for object {}", id);
    Ok(DetailView::from_record(&record))
}
