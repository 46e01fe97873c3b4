use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use crate::core::{
    drafts::profile_from_draft,
    facets::collect_facets,
    filters::{favorited_profiles, filter_profiles},
};
use crate::models::{Facets, FavoriteSet, FilterCriteria, Profile, ProfileDraft, Theme};
use crate::services::PreferenceStore;

/// Errors that can occur when applying catalog commands
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("Musician not found: {0}")]
    NotFound(String),
}

/// Views derived from the store state
///
/// Always consistent with the state after the last command.
#[derive(Debug, Clone, Default)]
pub struct DerivedViews {
    pub facets: Facets,
    pub filtered: Vec<Profile>,
    pub favorited: Vec<Profile>,
}

/// Owner of the musician catalog and the user's browsing state
///
/// Commands apply synchronously; after each one the derived views that
/// depend on the touched state are recomputed from scratch. Favorites and
/// theme changes are written through the [`PreferenceStore`].
pub struct CatalogStore {
    profiles: Vec<Profile>,
    favorites: FavoriteSet,
    filter: FilterCriteria,
    theme: Theme,
    preferences: PreferenceStore,
    views: DerivedViews,
}

impl CatalogStore {
    /// Create a store over `profiles`, restoring favorites and theme
    ///
    /// Without a stored theme, `system_theme` is used and nothing is written,
    /// so the ambient default stays live across launches until the first
    /// [`toggle_theme`](Self::toggle_theme) stores an explicit choice.
    pub fn open(profiles: Vec<Profile>, preferences: PreferenceStore, system_theme: Theme) -> Self {
        let favorites = preferences.load_favorites();
        let theme = preferences.load_theme(system_theme);

        tracing::info!(
            "Catalog opened with {} musicians, {} favorites, {} theme",
            profiles.len(),
            favorites.len(),
            theme
        );

        let mut store = Self {
            profiles,
            favorites,
            filter: FilterCriteria::default(),
            theme,
            preferences,
            views: DerivedViews::default(),
        };
        store.refresh_catalog_views();
        store
    }

    /// Register a new musician from a draft and prepend it to the catalog
    pub fn register(&mut self, draft: ProfileDraft) -> Profile {
        let id = self.next_id();
        let profile = profile_from_draft(id, draft, None);

        tracing::info!("Registered musician {} ({})", profile.id, profile.name);

        self.profiles.insert(0, profile.clone());
        self.refresh_catalog_views();
        profile
    }

    /// Replace the catalog entry with the same identifier
    ///
    /// The entry keeps its position. An unknown identifier leaves the
    /// catalog untouched and is reported as [`CatalogError::NotFound`].
    pub fn update(&mut self, profile: Profile) -> Result<(), CatalogError> {
        let slot = self
            .profiles
            .iter_mut()
            .find(|existing| existing.id == profile.id)
            .ok_or_else(|| CatalogError::NotFound(profile.id.clone()))?;

        tracing::info!("Updated musician {}", profile.id);

        *slot = profile;
        self.refresh_catalog_views();
        Ok(())
    }

    /// Apply an edit form to an existing musician
    ///
    /// Without a new image the current one is kept.
    pub fn edit(&mut self, id: &str, draft: ProfileDraft) -> Result<Profile, CatalogError> {
        let current_image = self
            .get(id)
            .map(|profile| profile.image.clone())
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))?;

        let profile = profile_from_draft(id.to_string(), draft, Some(current_image));
        self.update(profile.clone())?;
        Ok(profile)
    }

    /// Add or remove an identifier from the favorites
    ///
    /// Returns true when the identifier is a favorite afterwards. The id is
    /// not checked against the catalog.
    pub fn toggle_favorite(&mut self, id: &str) -> bool {
        let is_favorite = self.favorites.toggle(id);
        tracing::debug!("Favorite {} -> {}", id, is_favorite);

        self.preferences.save_favorites(&self.favorites);
        self.views.favorited = favorited_profiles(&self.profiles, &self.favorites);
        is_favorite
    }

    /// Replace the filter criteria
    pub fn set_filter(&mut self, criteria: FilterCriteria) {
        tracing::debug!("Filter set to {:?}", criteria);

        self.filter = criteria;
        self.views.filtered = filter_profiles(&self.profiles, &self.filter);
    }

    /// Flip between light and dark, returning the new theme
    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        tracing::debug!("Theme toggled to {}", self.theme);

        self.preferences.save_theme(self.theme);
        self.theme
    }

    pub fn get(&self, id: &str) -> Option<&Profile> {
        self.profiles.iter().find(|profile| profile.id == id)
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    pub fn favorites(&self) -> &FavoriteSet {
        &self.favorites
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.contains(id)
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.filter
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn views(&self) -> &DerivedViews {
        &self.views
    }

    pub fn facets(&self) -> &Facets {
        &self.views.facets
    }

    pub fn filtered(&self) -> &[Profile] {
        &self.views.filtered
    }

    pub fn favorited(&self) -> &[Profile] {
        &self.views.favorited
    }

    fn refresh_catalog_views(&mut self) {
        self.views = DerivedViews {
            facets: collect_facets(&self.profiles),
            filtered: filter_profiles(&self.profiles, &self.filter),
            favorited: favorited_profiles(&self.profiles, &self.favorites),
        };
    }

    /// Creation timestamp, suffixed when it collides with an existing id
    fn next_id(&self) -> String {
        let base = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        if self.get(&base).is_none() {
            return base;
        }

        let mut n = 2;
        loop {
            let candidate = format!("{}-{}", base, n);
            if self.get(&candidate).is_none() {
                return candidate;
            }
            n += 1;
        }
    }
}
