// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, ProfileDraft, FilterCriteria, Facets, Theme, UnknownTheme, FavoriteSet};
pub use requests::{ProfileForm, FilterRequest, GenerateBioRequest};
pub use responses::{
    MusicianView, MusiciansResponse, FilterResponse, FavoriteToggleResponse,
    ThemeResponse, BioResponse, BioRequestResponse, HealthResponse, ErrorResponse,
};
