use serde::{Deserialize, Serialize};

// ============================================================================
// Google Books API Types
// ============================================================================

/// Envelope returned by the `/volumes` search endpoint
///
/// The API omits `items` entirely when nothing matches the query.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolumeSearchResponse {
    #[serde(default)]
    pub total_items: u64,
    #[serde(default)]
    pub items: Vec<Volume>,
}

/// One catalog entry. Only the nested title is consumed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Volume {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub volume_info: Option<VolumeInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VolumeInfo {
    #[serde(default)]
    pub title: Option<String>,
}

impl Volume {
    /// Builds a volume carrying only a title
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            id: None,
            volume_info: Some(VolumeInfo {
                title: Some(title.into()),
            }),
        }
    }

    /// Title of the volume, if the catalog provided one
    pub fn title(&self) -> Option<&str> {
        self.volume_info.as_ref()?.title.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_response_deserialization() {
        let json = r#"{
            "kind": "books#volumes",
            "totalItems": 2,
            "items": [
                {
                    "kind": "books#volume",
                    "id": "zyTCAlFPjgYC",
                    "volumeInfo": {
                        "title": "The Google Story",
                        "authors": ["David A. Vise", "Mark Malseed"],
                        "publishedDate": "2005-11-15"
                    }
                },
                {
                    "kind": "books#volume",
                    "id": "abc",
                    "volumeInfo": { "title": "Dune" }
                }
            ]
        }"#;

        let response: VolumeSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_items, 2);
        assert_eq!(response.items.len(), 2);
        assert_eq!(response.items[0].id.as_deref(), Some("zyTCAlFPjgYC"));
        assert_eq!(response.items[0].title(), Some("The Google Story"));
        assert_eq!(response.items[1].title(), Some("Dune"));
    }

    #[test]
    fn test_search_response_without_items() {
        let json = r#"{ "kind": "books#volumes", "totalItems": 0 }"#;
        let response: VolumeSearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.total_items, 0);
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_missing_title_is_none() {
        let volume: Volume = serde_json::from_str(r#"{ "id": "x", "volumeInfo": {} }"#).unwrap();
        assert_eq!(volume.title(), None);

        let volume: Volume = serde_json::from_str(r#"{ "id": "x" }"#).unwrap();
        assert_eq!(volume.title(), None);
    }
}
