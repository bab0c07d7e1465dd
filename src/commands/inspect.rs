//! Single-object inspection

use std::io::Write;

use crate::collection::CollectionApi;
use crate::error::ExploreError;
use crate::log_error;
use crate::render::{build_detail_view, render_detail, DetailView};

use super::{write_json, OutputFormat};

const MODULE: &str = "commands::inspect";

/// Show the detail view of any identifier; a failed fetch is an error
pub async fn run_inspect<A, W>(
    api: &A,
    id: u64,
    format: OutputFormat,
    out: &mut W,
) -> Result<DetailView, ExploreError>
where
    A: CollectionApi + ?Sized,
    W: Write,
{
    let view = build_detail_view(api, id).await.map_err(|e| {
        log_error!(MODULE, "{}", e);
        e
    })?;
    write_detail(&view, format, out)?;
    Ok(view)
}

pub(crate) fn write_detail<W: Write>(
    view: &DetailView,
    format: OutputFormat,
    out: &mut W,
) -> Result<(), ExploreError> {
    match format {
        OutputFormat::Text => out.write_all(render_detail(view).as_bytes())?,
        OutputFormat::Json => write_json(out, view)?,
    }
    Ok(())
}
