use crate::models::{FavoriteSet, FilterCriteria, Profile};

/// Check if a profile satisfies every active filter predicate
///
/// The name test is a case-insensitive substring match; instrument and genre
/// must appear exactly in the profile's lists when set.
#[inline]
pub fn matches_filter(profile: &Profile, criteria: &FilterCriteria) -> bool {
    if !profile
        .name
        .to_lowercase()
        .contains(&criteria.text.to_lowercase())
    {
        return false;
    }

    if let Some(instrument) = &criteria.instrument {
        if !profile.instruments.contains(instrument) {
            return false;
        }
    }

    if let Some(genre) = &criteria.genre {
        if !profile.genres.contains(genre) {
            return false;
        }
    }

    true
}

/// Catalog entries matching the criteria, in catalog order
pub fn filter_profiles(profiles: &[Profile], criteria: &FilterCriteria) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|profile| matches_filter(profile, criteria))
        .cloned()
        .collect()
}

/// Catalog entries that are favorited, in catalog order
pub fn favorited_profiles(profiles: &[Profile], favorites: &FavoriteSet) -> Vec<Profile> {
    profiles
        .iter()
        .filter(|profile| favorites.contains(&profile.id))
        .cloned()
        .collect()
}
