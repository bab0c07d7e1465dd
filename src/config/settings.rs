//! User settings persistence
//!
//! Loads user preferences from `settings.json` and layers environment and
//! command-line overrides on top of them.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ExploreError;
use crate::utils::get_config_dir;
use crate::{log_debug, log_info, log_warn};

use super::{app, files, http, query, urls};

const MODULE: &str = "config::settings";

/// What the grid does with an item whose record could not be fetched
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum FetchFailurePolicy {
    /// Drop the item from the grid without telling the user
    #[default]
    Skip,
    /// Keep the grid position and show the error in it
    Placeholder,
}

/// Default values for settings
fn default_base_url() -> String {
    urls::COLLECTION_API_BASE.to_string()
}

fn default_timeout_secs() -> u64 {
    http::SHORT_TIMEOUT_SECS
}

fn default_limit() -> u8 {
    query::DEFAULT_LIMIT
}

fn default_images_only() -> bool {
    true
}

/// Effective application settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub base_url: String,
    pub timeout_secs: u64,
    pub default_limit: u8,
    pub images_only: bool,
    pub on_fetch_error: FetchFailurePolicy,
    pub developer_mode: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            default_limit: default_limit(),
            images_only: default_images_only(),
            on_fetch_error: FetchFailurePolicy::default(),
            developer_mode: false,
        }
    }
}

/// Values given on the command line or through the environment
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub on_fetch_error: Option<FetchFailurePolicy>,
    pub verbose: bool,
}

impl Settings {
    /// Location of the settings file in the user config directory
    pub fn default_path() -> PathBuf {
        get_config_dir(app::NAME).join(files::SETTINGS)
    }

    /// Load settings from an explicit file, or from the default location
    ///
    /// A missing or broken default file falls back to built-in defaults.
    /// An explicit file that cannot be loaded is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ExploreError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let path = Self::default_path();
        if !path.exists() {
            log_debug!(MODULE, "No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        match Self::load_from(&path) {
            Ok(settings) => Ok(settings),
            Err(e) => {
                log_warn!(MODULE, "Ignoring settings file: {}. Using defaults.", e);
                Ok(Self::default())
            }
        }
    }

    /// Read and validate a settings file
    pub fn load_from(path: &Path) -> Result<Self, ExploreError> {
        let content = fs::read_to_string(path).map_err(|e| {
            ExploreError::Settings(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let settings: Settings = serde_json::from_str(&content).map_err(|e| {
            ExploreError::Settings(format!("Failed to parse {}: {}", path.display(), e))
        })?;

        log_info!(MODULE, "Loaded settings from {}", path.display());
        settings.validated()
    }

    /// Apply command-line and environment overrides
    pub fn with_overrides(mut self, overrides: &SettingsOverrides) -> Result<Self, ExploreError> {
        if let Some(ref base_url) = overrides.base_url {
            self.base_url = base_url.clone();
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.timeout_secs = timeout;
        }
        if let Some(policy) = overrides.on_fetch_error {
            self.on_fetch_error = policy;
        }
        if overrides.verbose {
            self.developer_mode = true;
        }
        self.validated()
    }

    fn validated(mut self) -> Result<Self, ExploreError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ExploreError::Settings("base_url must not be empty".to_string()));
        }
        self.base_url = trimmed.to_string();

        if self.timeout_secs == 0 {
            return Err(ExploreError::Settings(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if !(query::MIN_LIMIT..=query::MAX_LIMIT).contains(&self.default_limit) {
            return Err(ExploreError::Settings(format!(
                "default_limit must be between {} and {}, got {}",
                query::MIN_LIMIT,
                query::MAX_LIMIT,
                self.default_limit
            )));
        }

        Ok(self)
    }
}
