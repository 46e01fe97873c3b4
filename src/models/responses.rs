use serde::{Deserialize, Serialize};
use crate::models::domain::{FilterCriteria, Profile, Theme};
use crate::services::BioRequestState;

/// A profile as shown in a listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusicianView {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// Response for listing endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MusiciansResponse {
    pub musicians: Vec<MusicianView>,
    pub total: usize,
}

/// Response for the filter endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterResponse {
    pub filter: FilterCriteria,
    pub musicians: Vec<MusicianView>,
    pub total: usize,
}

/// Response for favorite toggling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggleResponse {
    pub id: String,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

/// Current display theme
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeResponse {
    pub theme: Theme,
}

/// Generated biography text
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioResponse {
    pub bio: String,
}

/// State of a tracked biography request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BioRequestResponse {
    #[serde(rename = "requestId")]
    pub request_id: uuid::Uuid,
    #[serde(flatten)]
    pub state: BioRequestState,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
