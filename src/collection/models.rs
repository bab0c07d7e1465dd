//! Collection API data models
//!
//! Wire types for the search and object endpoints. Fields the API may omit
//! stay optional here; display defaults are applied by the renderer.

use serde::{Deserialize, Deserializer, Serialize};

/// Result of a search call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectSummary {
    #[serde(default)]
    pub total: u64,
    /// Identifiers in the order the API ranked them
    #[serde(rename = "objectIDs", default, deserialize_with = "null_as_empty")]
    pub object_ids: Vec<u64>,
}

impl ObjectSummary {
    pub fn is_empty(&self) -> bool {
        self.object_ids.is_empty()
    }
}

/// The API reports "no matches" as `"objectIDs": null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<u64>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Metadata for one catalogued artwork
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkRecord {
    #[serde(rename = "objectID")]
    pub id: u64,
    pub title: Option<String>,
    pub artist_display_name: Option<String>,
    pub object_date: Option<String>,
    pub medium: Option<String>,
    pub dimensions: Option<String>,
    pub primary_image: Option<String>,
    pub primary_image_small: Option<String>,
    #[serde(rename = "objectURL")]
    pub object_url: Option<String>,
}

#[cfg(test)]
impl ArtworkRecord {
    /// A record carrying only its identifier
    pub fn bare(id: u64) -> Self {
        Self {
            id,
            title: None,
            artist_display_name: None,
            object_date: None,
            medium: None,
            dimensions: None,
            primary_image: None,
            primary_image_small: None,
            object_url: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_object_ids_decode_as_empty() {
        let summary: ObjectSummary =
            serde_json::from_str(r#"{"total": 0, "objectIDs": null}"#).unwrap();
        assert_eq!(summary.total, 0);
        assert!(summary.is_empty());
    }

    #[test]
    fn test_object_ids_keep_api_order() {
        let summary: ObjectSummary =
            serde_json::from_str(r#"{"total": 3, "objectIDs": [436535, 12, 9001]}"#).unwrap();
        assert_eq!(summary.object_ids, vec![436535, 12, 9001]);
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let json = r#"{
            "objectID": 436535,
            "isHighlight": true,
            "title": "Wheat Field with Cypresses",
            "artistDisplayName": "Vincent van Gogh",
            "objectDate": "1889",
            "medium": "Oil on canvas",
            "dimensions": "28 7/8 × 36 3/4 in.",
            "primaryImage": "https://images.metmuseum.org/full.jpg",
            "primaryImageSmall": "https://images.metmuseum.org/small.jpg",
            "objectURL": "https://www.metmuseum.org/art/collection/search/436535"
        }"#;
        let record: ArtworkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, 436535);
        assert_eq!(record.artist_display_name.as_deref(), Some("Vincent van Gogh"));
        assert_eq!(
            record.object_url.as_deref(),
            Some("https://www.metmuseum.org/art/collection/search/436535")
        );
    }

    #[test]
    fn test_record_missing_fields_are_none() {
        let record: ArtworkRecord = serde_json::from_str(r#"{"objectID": 7}"#).unwrap();
        assert_eq!(record, ArtworkRecord::bare(7));
    }
}
