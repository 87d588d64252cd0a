use serde::{Deserialize, Serialize};

mod volume;

pub use volume::{Volume, VolumeInfo, VolumeSearchResponse};

/// Request body for the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenreRequest {
    pub genre: String,
}

/// Response body for the recommendation endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommendationResponse {
    pub recommendation: String,
}
