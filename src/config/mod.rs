//! Application configuration and constants
//!
//! Centralizes hard-coded values and URLs. User-facing settings layered on
//! top of these live in the `settings` submodule.

mod settings;

pub use settings::{FetchFailurePolicy, Settings, SettingsOverrides};

/// Application metadata
pub mod app {
    /// Application name used for cache and config directories
    pub const NAME: &str = "met-explorer";

    /// Application display name
    pub const DISPLAY_NAME: &str = "Met Explorer";

    /// User agent for HTTP requests
    pub const USER_AGENT: &str = "Met-Explorer/1.0";
}

/// API endpoints and URLs
pub mod urls {
    /// Met Collection API base (search and objects endpoints hang off it)
    pub const COLLECTION_API_BASE: &str =
        "https://collectionapi.metmuseum.org/public/collection/v1";

    /// Public landing page for the API, shown in the browse banner
    pub const COLLECTION_API_HOME: &str = "https://collectionapi.metmuseum.org";
}

/// HTTP client settings
pub mod http {
    /// Per-call deadline in seconds, used for both connect and total time
    pub const SHORT_TIMEOUT_SECS: u64 = 10;

    /// Maximum redirects followed per request
    pub const MAX_REDIRECTS: usize = 10;
}

/// Query limits
pub mod query {
    /// Smallest number of results a query may show
    pub const MIN_LIMIT: u8 = 1;

    /// Largest number of results a query may show
    pub const MAX_LIMIT: u8 = 12;

    /// Number of results shown when nothing else is configured
    pub const DEFAULT_LIMIT: u8 = 6;
}

/// Grid rendering settings
pub mod grid {
    /// Fixed number of grid columns
    pub const COLUMNS: usize = 3;

    /// Width of one rendered column in characters
    pub const CELL_WIDTH: usize = 34;

    /// Gap between rendered columns
    pub const COLUMN_GAP: &str = "  ";
}

/// Settings file settings
pub mod files {
    /// Settings file name inside the config directory
    pub const SETTINGS: &str = "settings.json";

    /// Number of log files kept in the log directory
    pub const KEEP_LOG_FILES: usize = 10;
}

/// Render-time defaults for missing record fields
pub mod defaults {
    pub const TITLE: &str = "Untitled";
    pub const ARTIST: &str = "Unknown";
    pub const NOT_AVAILABLE: &str = "N/A";
    pub const NO_IMAGE: &str = "No image available";
}
