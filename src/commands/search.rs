//! One-shot search interaction
//!
//! Runs search -> grid -> inspect for a single query and writes the result.

use std::io::Write;

use serde::Serialize;

use crate::collection::CollectionApi;
use crate::config::FetchFailurePolicy;
use crate::error::ExploreError;
use crate::query::SearchQuery;
use crate::render::{build_detail_view, build_search_page, render_search_page, DetailView, SearchPage};
use crate::{log_error, log_info, log_warn};

use super::inspect::write_detail;
use super::{write_json, OutputFormat};

const MODULE: &str = "commands::search";

/// Which displayed identifier gets the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InspectChoice {
    /// The first displayed identifier
    First,
    Id(u64),
    Skip,
}

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub inspect: InspectChoice,
    pub policy: FetchFailurePolicy,
    pub format: OutputFormat,
}

#[derive(Serialize)]
struct SearchReport<'a> {
    page: &'a SearchPage,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<&'a DetailView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail_error: Option<String>,
}

/// Run one search interaction and write the page, then the detail view
///
/// A search failure is an error. An empty result is written as a warning and
/// stops before the inspect step. An invalid selection or a failed detail
/// fetch is reported in place of the detail view; the grid stays.
pub async fn run_search<A, W>(
    api: &A,
    query: &SearchQuery,
    options: &SearchOptions,
    out: &mut W,
) -> Result<SearchPage, ExploreError>
where
    A: CollectionApi + ?Sized,
    W: Write,
{
    log_info!(
        MODULE,
        "Searching for '{}' (limit: {}, images_only: {})",
        query.text(),
        query.limit(),
        query.images_only()
    );

    let page = build_search_page(api, query, options.policy).await?;

    let selection = match options.inspect {
        InspectChoice::Skip => Ok(None),
        InspectChoice::First => Ok(page.object_ids().first().copied()),
        InspectChoice::Id(id) => match page {
            SearchPage::Empty { .. } => Ok(None),
            SearchPage::Results { ref object_ids, .. } if object_ids.contains(&id) => Ok(Some(id)),
            SearchPage::Results { .. } => Err(ExploreError::InvalidSelection(id)),
        },
    };

    let (detail, detail_error) = match selection {
        Ok(Some(id)) => match build_detail_view(api, id).await {
            Ok(view) => (Some(view), None),
            Err(e) => {
                log_error!(MODULE, "{}", e);
                (None, Some(e.to_string()))
            }
        },
        Ok(None) => (None, None),
        Err(e) => {
            log_warn!(MODULE, "{}", e);
            (None, Some(e.to_string()))
        }
    };

    match options.format {
        OutputFormat::Text => {
            out.write_all(render_search_page(&page).as_bytes())?;
            if detail.is_some() || detail_error.is_some() {
                writeln!(out)?;
                writeln!(out, "Inspect an artwork")?;
                writeln!(out, "------------------")?;
            }
            if let Some(ref view) = detail {
                write_detail(view, OutputFormat::Text, out)?;
            }
            if let Some(ref error) = detail_error {
                writeln!(out, "Error: {}", error)?;
            }
        }
        OutputFormat::Json => {
            let report = SearchReport {
                page: &page,
                detail: detail.as_ref(),
                detail_error,
            };
            write_json(out, &report)?;
        }
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::fake::FakeCollection;
    use crate::collection::ArtworkRecord;

    fn options(inspect: InspectChoice, format: OutputFormat) -> SearchOptions {
        SearchOptions {
            inspect,
            policy: FetchFailurePolicy::Skip,
            format,
        }
    }

    fn detailed(id: u64) -> ArtworkRecord {
        let mut record = ArtworkRecord::bare(id);
        record.title = Some(format!("Artwork {}", id));
        record.primary_image = Some(format!("https://img.test/{}-full.jpg", id));
        record.primary_image_small = Some(format!("https://img.test/{}-small.jpg", id));
        record.medium = Some("Tempera on wood".to_string());
        record.dimensions = Some("10 x 12 in.".to_string());
        record
    }

    fn two_item_api() -> FakeCollection {
        FakeCollection::new()
            .with_search("flower", 2, vec![1, 2])
            .with_record(detailed(1))
            .with_record(detailed(2))
    }

    #[tokio::test]
    async fn test_inspect_second_item() {
        let api = two_item_api();
        let query = SearchQuery::new("flower", true, 6).unwrap();

        let mut out = Vec::new();
        run_search(&api, &query, &options(InspectChoice::Id(2), OutputFormat::Text), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let (grid, detail) = text.split_once("Inspect an artwork").unwrap();
        assert!(grid.contains("#1"));
        assert!(grid.contains("#2"));
        assert!(detail.contains("Image: https://img.test/2-full.jpg"));
        assert!(detail.contains("Medium: Tempera on wood"));
        assert!(detail.contains("Dimensions: 10 x 12 in."));
    }

    #[tokio::test]
    async fn test_default_inspects_first_item() {
        let api = two_item_api();
        let query = SearchQuery::new("flower", true, 6).unwrap();

        let mut out = Vec::new();
        run_search(&api, &query, &options(InspectChoice::First, OutputFormat::Json), &mut out)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["page"]["status"], "results");
        assert_eq!(value["page"]["object_ids"], serde_json::json!([1, 2]));
        assert_eq!(value["detail"]["object_id"], 1);
    }

    #[tokio::test]
    async fn test_selection_outside_results_keeps_grid() {
        let api = two_item_api();
        let query = SearchQuery::new("flower", true, 6).unwrap();

        let mut out = Vec::new();
        let page = run_search(&api, &query, &options(InspectChoice::Id(99), OutputFormat::Text), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(page.cells().len(), 2);
        let (grid, detail) = text.split_once("Inspect an artwork").unwrap();
        assert!(grid.contains("#1"));
        assert!(grid.contains("#2"));
        assert!(detail.contains("Error: Object 99 is not among the displayed results"));
        // no detail fetch for an identifier outside the results
        assert!(!api.calls().contains(&"object:99".to_string()));
    }

    #[tokio::test]
    async fn test_selection_outside_results_json_reports_error() {
        let api = two_item_api();
        let query = SearchQuery::new("flower", true, 6).unwrap();

        let mut out = Vec::new();
        run_search(&api, &query, &options(InspectChoice::Id(99), OutputFormat::Json), &mut out)
            .await
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["page"]["object_ids"], serde_json::json!([1, 2]));
        assert!(value["detail"].is_null());
        assert!(value["detail_error"].as_str().unwrap().contains("Object 99"));
    }

    #[tokio::test]
    async fn test_empty_result_skips_inspect() {
        let api = FakeCollection::new().with_search("qwxz", 0, vec![]);
        let query = SearchQuery::new("qwxz", true, 6).unwrap();

        let mut out = Vec::new();
        let page = run_search(&api, &query, &options(InspectChoice::First, OutputFormat::Text), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(matches!(page, SearchPage::Empty { .. }));
        assert!(text.contains("No object IDs returned"));
        assert!(!text.contains("Inspect an artwork"));
    }

    #[tokio::test]
    async fn test_detail_failure_keeps_grid() {
        // object 1 renders in the grid; object 2 fails for both grid and detail
        let api = FakeCollection::new()
            .with_search("flower", 2, vec![1, 2])
            .with_record(detailed(1))
            .failing_object(2);
        let query = SearchQuery::new("flower", true, 6).unwrap();

        let mut out = Vec::new();
        let page = run_search(&api, &query, &options(InspectChoice::Id(2), OutputFormat::Text), &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(page.cells().len(), 1);
        assert!(text.contains("#1"));
        assert!(text.contains("Error: Failed to load object 2"));
    }
}
