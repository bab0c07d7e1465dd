//! Search result grid
//!
//! Fetches the records for the first `limit` identifiers, one after another,
//! and places them row-major across a fixed number of columns.

use serde::Serialize;

use crate::collection::{ArtworkRecord, CollectionApi};
use crate::config::{self, FetchFailurePolicy};
use crate::error::ExploreError;
use crate::query::SearchQuery;
use crate::utils::non_empty;
use crate::{log_info, log_warn};

const MODULE: &str = "render::grid";

/// Display fields of one artwork in the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtworkCard {
    pub image_url: Option<String>,
    pub title: String,
    pub artist: String,
    pub date: String,
    pub object_url: Option<String>,
}

impl ArtworkCard {
    /// Apply display defaults; the small image is preferred for the grid
    pub fn from_record(record: &ArtworkRecord) -> Self {
        let image_url = non_empty(record.primary_image_small.as_deref())
            .or_else(|| non_empty(record.primary_image.as_deref()))
            .map(str::to_string);

        Self {
            image_url,
            title: non_empty(record.title.as_deref())
                .unwrap_or(config::defaults::TITLE)
                .to_string(),
            artist: non_empty(record.artist_display_name.as_deref())
                .unwrap_or(config::defaults::ARTIST)
                .to_string(),
            date: non_empty(record.object_date.as_deref())
                .unwrap_or(config::defaults::NOT_AVAILABLE)
                .to_string(),
            object_url: non_empty(record.object_url.as_deref()).map(str::to_string),
        }
    }
}

/// What occupies a grid position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellContent {
    Artwork(ArtworkCard),
    /// Only produced under [`FetchFailurePolicy::Placeholder`]
    Unavailable { error: String },
}

/// One positioned grid item
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Index in the displayed identifier list
    pub position: usize,
    pub row: usize,
    pub column: usize,
    pub object_id: u64,
    pub content: CellContent,
}

impl GridCell {
    fn at(position: usize, object_id: u64, content: CellContent) -> Self {
        Self {
            position,
            row: position / config::grid::COLUMNS,
            column: position % config::grid::COLUMNS,
            object_id,
            content,
        }
    }
}

/// Outcome of one search interaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SearchPage {
    /// The search succeeded but matched nothing; no grid is produced
    Empty {
        query: String,
        total: u64,
        limit: usize,
    },
    Results {
        query: String,
        total: u64,
        limit: usize,
        /// The displayed identifiers, in API order
        object_ids: Vec<u64>,
        cells: Vec<GridCell>,
        /// Identifiers dropped because their fetch failed
        skipped: Vec<u64>,
    },
}

impl SearchPage {
    /// Identifiers available for inspection
    pub fn object_ids(&self) -> &[u64] {
        match self {
            SearchPage::Empty { .. } => &[],
            SearchPage::Results { object_ids, .. } => object_ids,
        }
    }

    pub fn cells(&self) -> &[GridCell] {
        match self {
            SearchPage::Empty { .. } => &[],
            SearchPage::Results { cells, .. } => cells,
        }
    }
}

/// Run a search and build the grid for its first `limit` identifiers
///
/// A failed search ends the interaction. A failed record fetch never does;
/// it is handled by `policy` and the remaining identifiers are still fetched.
pub async fn build_search_page<A>(
    api: &A,
    query: &SearchQuery,
    policy: FetchFailurePolicy,
) -> Result<SearchPage, ExploreError>
where
    A: CollectionApi + ?Sized,
{
    let summary = api
        .search(query.text(), query.images_only())
        .await
        .map_err(ExploreError::SearchFailure)?;

    if summary.is_empty() {
        log_warn!(MODULE, "No object IDs returned for '{}'", query.text());
        return Ok(SearchPage::Empty {
            query: query.text().to_string(),
            total: summary.total,
            limit: query.limit(),
        });
    }

    let object_ids: Vec<u64> = summary
        .object_ids
        .iter()
        .copied()
        .take(query.limit())
        .collect();

    let mut cells = Vec::with_capacity(object_ids.len());
    let mut skipped = Vec::new();

    for (position, &id) in object_ids.iter().enumerate() {
        match api.get_object(id).await {
            Ok(record) => {
                cells.push(GridCell::at(
                    position,
                    id,
                    CellContent::Artwork(ArtworkCard::from_record(&record)),
                ));
            }
            Err(e) => match policy {
                FetchFailurePolicy::Skip => {
                    log_warn!(MODULE, "Skipping object {}: {}", id, e);
                    skipped.push(id);
                }
                FetchFailurePolicy::Placeholder => {
                    log_warn!(MODULE, "Showing placeholder for object {}: {}", id, e);
                    cells.push(GridCell::at(
                        position,
                        id,
                        CellContent::Unavailable {
                            error: e.to_string(),
                        },
                    ));
                }
            },
        }
    }

    log_info!(
        MODULE,
        "Rendered {} of {} items for '{}'",
        cells.len(),
        object_ids.len(),
        query.text()
    );

    Ok(SearchPage::Results {
        query: query.text().to_string(),
        total: summary.total,
        limit: query.limit(),
        object_ids,
        cells,
        skipped,
    })
}
