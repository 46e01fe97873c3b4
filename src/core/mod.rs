// Core catalog exports
pub mod catalog;
pub mod drafts;
pub mod facets;
pub mod filters;
pub mod seed;

pub use catalog::{CatalogStore, CatalogError, DerivedViews};
pub use drafts::{split_delimited, placeholder_image, profile_from_draft};
pub use facets::collect_facets;
pub use filters::{matches_filter, filter_profiles, favorited_profiles};
pub use seed::sample_musicians;
