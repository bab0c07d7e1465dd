//! Query input
//!
//! Validated search queries built from command-line arguments or lines
//! typed into a browse session.

use serde::Serialize;

use crate::config::query::{MAX_LIMIT, MIN_LIMIT};
use crate::error::ExploreError;

/// One submitted search
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchQuery {
    text: String,
    images_only: bool,
    limit: u8,
}

impl SearchQuery {
    /// Build a query, trimming the text and checking the limit
    pub fn new(text: &str, images_only: bool, limit: u8) -> Result<Self, ExploreError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ExploreError::InvalidQuery(
                "search text must not be empty".to_string(),
            ));
        }

        Ok(Self {
            text: text.to_string(),
            images_only,
            limit: validate_limit(limit)?,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn images_only(&self) -> bool {
        self.images_only
    }

    pub fn limit(&self) -> usize {
        usize::from(self.limit)
    }
}

/// Check a result limit against the allowed range
pub fn validate_limit(limit: u8) -> Result<u8, ExploreError> {
    if (MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        Ok(limit)
    } else {
        Err(ExploreError::InvalidQuery(format!(
            "limit must be between {} and {}, got {}",
            MIN_LIMIT, MAX_LIMIT, limit
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_trimmed() {
        let query = SearchQuery::new("  van gogh ", true, 6).unwrap();
        assert_eq!(query.text(), "van gogh");
        assert!(query.images_only());
        assert_eq!(query.limit(), 6);
    }

    #[test]
    fn test_blank_text_rejected() {
        assert!(matches!(
            SearchQuery::new("   ", true, 6),
            Err(ExploreError::InvalidQuery(_))
        ));
    }

    #[test]
    fn test_limit_bounds() {
        assert!(SearchQuery::new("flower", false, 1).is_ok());
        assert!(SearchQuery::new("flower", false, 12).is_ok());
        assert!(SearchQuery::new("flower", false, 0).is_err());
        assert!(SearchQuery::new("flower", false, 13).is_err());
    }
}
