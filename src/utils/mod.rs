//! Shared utilities
//!
//! HTTP client construction, platform paths and text helpers.

mod http;
mod system;
mod text;

pub use http::create_short_timeout_client;
pub use system::{get_cache_dir, get_config_dir};
pub use text::{non_empty, truncate_to_width};
