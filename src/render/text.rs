//! Plain-text rendering of search pages and detail views

use crate::config::{defaults, grid};
use crate::utils::truncate_to_width;

use super::{CellContent, DetailView, GridCell, SearchPage};

const EMPTY_WARNING: &str = "Warning: No object IDs returned for this search.";

fn header(query: &str, total: u64, limit: usize) -> String {
    format!(
        "Found {} results for \"{}\" (showing up to {})",
        total, query, limit
    )
}

/// Render a search page: header line, then either the warning or the grid
pub fn render_search_page(page: &SearchPage) -> String {
    let mut out = String::new();

    match page {
        SearchPage::Empty {
            query,
            total,
            limit,
        } => {
            out.push_str(&header(query, *total, *limit));
            out.push('\n');
            out.push_str(EMPTY_WARNING);
            out.push('\n');
        }
        SearchPage::Results {
            query,
            total,
            limit,
            cells,
            ..
        } => {
            out.push_str(&header(query, *total, *limit));
            out.push_str("\n\n");
            render_grid(cells, &mut out);
        }
    }

    out
}

fn cell_lines(cell: &GridCell) -> Vec<String> {
    let mut lines = vec![format!("#{}", cell.object_id)];

    match &cell.content {
        CellContent::Artwork(card) => {
            lines.push(match card.image_url {
                Some(ref url) => format!("Image: {}", url),
                None => defaults::NO_IMAGE.to_string(),
            });
            lines.push(format!("Title: {}", card.title));
            lines.push(format!("Artist: {}", card.artist));
            lines.push(format!("Date: {}", card.date));
            if let Some(ref url) = card.object_url {
                lines.push(format!("View on MET: {}", url));
            }
        }
        CellContent::Unavailable { error } => {
            lines.push("Could not load this artwork".to_string());
            lines.push(error.clone());
        }
    }

    lines
}

fn render_grid(cells: &[GridCell], out: &mut String) {
    let Some(last_row) = cells.iter().map(|c| c.row).max() else {
        return;
    };

    let row_width = grid::CELL_WIDTH * grid::COLUMNS + grid::COLUMN_GAP.len() * (grid::COLUMNS - 1);
    let separator = "-".repeat(row_width);

    for row in 0..=last_row {
        let mut columns: Vec<Vec<String>> = vec![Vec::new(); grid::COLUMNS];
        for cell in cells.iter().filter(|c| c.row == row) {
            columns[cell.column] = cell_lines(cell);
        }

        let height = columns.iter().map(Vec::len).max().unwrap_or(0);
        if height == 0 {
            continue;
        }

        for line in 0..height {
            let parts: Vec<String> = columns
                .iter()
                .map(|column| {
                    let text = column.get(line).map(String::as_str).unwrap_or("");
                    format!(
                        "{:<width$}",
                        truncate_to_width(text, grid::CELL_WIDTH),
                        width = grid::CELL_WIDTH
                    )
                })
                .collect();
            out.push_str(parts.join(grid::COLUMN_GAP).trim_end());
            out.push('\n');
        }

        out.push_str(&separator);
        out.push('\n');
    }
}

/// Render the detail view of one artwork
pub fn render_detail(view: &DetailView) -> String {
    let mut lines = vec![
        view.title.clone(),
        "=".repeat(view.title.chars().count()),
        match view.image_url {
            Some(ref url) => format!("Image: {}", url),
            None => defaults::NO_IMAGE.to_string(),
        },
        format!("Artist: {}", view.artist),
        format!("Date: {}", view.date),
        format!("Medium: {}", view.medium),
        format!("Dimensions: {}", view.dimensions),
    ];
    if let Some(ref url) = view.object_url {
        lines.push(format!("Open on MET Museum website: {}", url));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
