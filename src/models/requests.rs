use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{FilterCriteria, ProfileDraft};

/// Registration and edit form body
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ProfileForm {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(length(min = 1))]
    pub location: String,
    /// Comma-delimited instrument names
    #[validate(length(min = 1))]
    pub instruments: String,
    /// Comma-delimited genre names
    #[validate(length(min = 1))]
    pub genres: String,
    #[validate(length(min = 1))]
    pub bio: String,
    #[validate(email)]
    pub email: String,
    #[validate(url)]
    pub portfolio: String,
    /// Image URL or data URI from an upload
    #[serde(default)]
    pub image: Option<String>,
}

impl From<ProfileForm> for ProfileDraft {
    fn from(form: ProfileForm) -> Self {
        ProfileDraft {
            name: form.name,
            location: form.location,
            instruments: form.instruments,
            genres: form.genres,
            bio: form.bio,
            email: form.email,
            portfolio: form.portfolio,
            image: form.image,
        }
    }
}

/// Filter selector values; empty strings mean "all"
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterRequest {
    /// Name search text; also accepted as `text`, the field name in responses
    #[serde(default, alias = "text")]
    pub search: String,
    #[serde(default)]
    pub instrument: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl From<FilterRequest> for FilterCriteria {
    fn from(req: FilterRequest) -> Self {
        FilterCriteria::new(req.search, req.instrument, req.genre)
    }
}

/// Request to generate a biography
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct GenerateBioRequest {
    #[validate(length(min = 1))]
    pub keywords: String,
}
