//! FreelancMusic - catalog service for a freelance musician directory
//!
//! This library holds the catalog store behind the directory: musician
//! profiles, search filters, favorites and the display theme, plus the
//! Gemini-backed biography helper.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{CatalogStore, CatalogError, DerivedViews, sample_musicians};
pub use models::{Profile, ProfileDraft, FilterCriteria, Facets, FavoriteSet, Theme};
pub use services::{GeminiClient, PreferenceStore, KeyValueStore, FileKeyValueStore, MemoryKeyValueStore};
