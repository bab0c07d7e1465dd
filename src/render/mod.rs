//! Result rendering module
//!
//! Turns search results and fetched records into grid and detail views,
//! then formats those views as terminal text.

mod detail;
mod grid;
mod text;

pub use detail::{build_detail_view, DetailView};
pub use grid::{build_search_page, ArtworkCard, CellContent, GridCell, SearchPage};
pub use text::{render_detail, render_search_page};
