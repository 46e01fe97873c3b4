use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A registered musician
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub instruments: Vec<String>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub bio: String,
    pub email: String,
    pub portfolio: String,
    pub image: String,
}

/// Editable form representation of a profile
///
/// Instruments and genres are comma-delimited text, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileDraft {
    pub name: String,
    pub location: String,
    pub instruments: String,
    pub genres: String,
    #[serde(default)]
    pub bio: String,
    pub email: String,
    pub portfolio: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl ProfileDraft {
    /// Build the edit form for an existing profile
    pub fn from_profile(profile: &Profile) -> Self {
        Self {
            name: profile.name.clone(),
            location: profile.location.clone(),
            instruments: profile.instruments.join(", "),
            genres: profile.genres.join(", "),
            bio: profile.bio.clone(),
            email: profile.email.clone(),
            portfolio: profile.portfolio.clone(),
            image: Some(profile.image.clone()),
        }
    }

    /// Uploaded image, ignoring blank values
    pub fn image(&self) -> Option<&str> {
        self.image
            .as_deref()
            .map(str::trim)
            .filter(|image| !image.is_empty())
    }
}

/// Transient search parameters
///
/// `None` for instrument or genre means the facet is not filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub instrument: Option<String>,
    #[serde(default)]
    pub genre: Option<String>,
}

impl FilterCriteria {
    /// Build criteria from raw selector values, where an empty string means "all"
    pub fn new(
        text: impl Into<String>,
        instrument: Option<String>,
        genre: Option<String>,
    ) -> Self {
        Self {
            text: text.into(),
            instrument: instrument.filter(|value| !value.is_empty()),
            genre: genre.filter(|value| !value.is_empty()),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.instrument.is_none() && self.genre.is_none()
    }
}

/// Distinct instrument and genre values across the catalog
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Facets {
    pub instruments: Vec<String>,
    pub genres: Vec<String>,
}

/// Display color scheme
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for a theme value that is neither `light` nor `dark`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme: {0}")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Identifiers marked as favorite, in the order they were favorited
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|fav| fav == id)
    }

    /// Add the id if absent, remove it if present
    ///
    /// Returns true when the id is a favorite afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.contains(id) {
            self.ids.retain(|fav| fav != id);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.ids
    }
}

impl FromIterator<String> for FavoriteSet {
    /// Collects ids, keeping the first occurrence of duplicates
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut set = FavoriteSet::new();
        for id in iter {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_parse_and_toggle() {
        assert_eq!("dark".parse::<Theme>(), Ok(Theme::Dark));
        assert_eq!("light".parse::<Theme>(), Ok(Theme::Light));
        assert!("Dark".parse::<Theme>().is_err());
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn test_theme_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
    }

    #[test]
    fn test_favorite_toggle_is_self_inverse() {
        let mut favorites: FavoriteSet = vec!["3".to_string(), "5".to_string()].into_iter().collect();
        let before = favorites.clone();

        assert!(favorites.toggle("1"));
        assert!(!favorites.toggle("1"));
        assert_eq!(favorites, before);

        assert!(!favorites.toggle("3"));
        assert!(favorites.toggle("3"));
        assert!(favorites.contains("3"));
    }

    #[test]
    fn test_favorite_set_drops_duplicates() {
        let favorites: FavoriteSet = ["1", "2", "1"].iter().map(|s| s.to_string()).collect();
        assert_eq!(favorites.as_slice(), &["1".to_string(), "2".to_string()]);
    }

    #[test]
    fn test_filter_criteria_treats_empty_selectors_as_unset() {
        let criteria = FilterCriteria::new("", Some(String::new()), Some("Jazz".to_string()));
        assert_eq!(criteria.instrument, None);
        assert_eq!(criteria.genre.as_deref(), Some("Jazz"));
        assert!(!criteria.is_empty());
        assert!(FilterCriteria::default().is_empty());
    }

    #[test]
    fn test_draft_from_profile_joins_lists() {
        let profile = Profile {
            id: "7".to_string(),
            name: "Ana".to_string(),
            location: "Recife, PE".to_string(),
            instruments: vec!["Sax".to_string(), "Flute".to_string()],
            genres: vec!["Frevo".to_string()],
            bio: String::new(),
            email: "ana@example.com".to_string(),
            portfolio: "https://example.com/ana".to_string(),
            image: "data:image/png;base64,AAAA".to_string(),
        };

        let draft = ProfileDraft::from_profile(&profile);
        assert_eq!(draft.instruments, "Sax, Flute");
        assert_eq!(draft.genres, "Frevo");
        assert_eq!(draft.image(), Some("data:image/png;base64,AAAA"));
    }
}
