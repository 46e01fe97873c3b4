use crate::models::{FavoriteSet, Theme};
use crate::services::storage::KeyValueStore;

/// Default storage key for the favorite identifiers
pub const FAVORITES_KEY: &str = "freelancmusic_favorites";

/// Default storage key for the display theme
pub const THEME_KEY: &str = "theme";

/// Storage keys used by [`PreferenceStore`]
#[derive(Debug, Clone)]
pub struct PreferenceKeys {
    pub favorites: String,
    pub theme: String,
}

impl Default for PreferenceKeys {
    fn default() -> Self {
        Self {
            favorites: FAVORITES_KEY.to_string(),
            theme: THEME_KEY.to_string(),
        }
    }
}

/// Persistence adapter for favorites and theme
///
/// Reads never fail: missing or malformed entries fall back to defaults.
/// Writes are best-effort and only logged on failure.
pub struct PreferenceStore {
    storage: Box<dyn KeyValueStore>,
    keys: PreferenceKeys,
}

impl PreferenceStore {
    pub fn new(storage: Box<dyn KeyValueStore>, keys: PreferenceKeys) -> Self {
        Self { storage, keys }
    }

    pub fn with_default_keys(storage: Box<dyn KeyValueStore>) -> Self {
        Self::new(storage, PreferenceKeys::default())
    }

    /// Load the favorite set, or an empty set when absent or malformed
    pub fn load_favorites(&self) -> FavoriteSet {
        let raw = match self.storage.get(&self.keys.favorites) {
            Ok(Some(raw)) => raw,
            Ok(None) => return FavoriteSet::new(),
            Err(e) => {
                tracing::warn!("Failed to read favorites, starting empty: {}", e);
                return FavoriteSet::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&raw) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                tracing::warn!("Malformed favorites entry {:?}, starting empty: {}", raw, e);
                FavoriteSet::new()
            }
        }
    }

    /// Persist the favorite set as a JSON array
    pub fn save_favorites(&mut self, favorites: &FavoriteSet) {
        let json = match serde_json::to_string(favorites.as_slice()) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to encode favorites: {}", e);
                return;
            }
        };

        if let Err(e) = self.storage.set(&self.keys.favorites, &json) {
            tracing::error!("Failed to persist favorites: {}", e);
        }
    }

    /// Load the theme, or `system_theme` when absent or unknown
    pub fn load_theme(&self, system_theme: Theme) -> Theme {
        match self.storage.get(&self.keys.theme) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|e| {
                tracing::warn!("Ignoring stored theme: {}", e);
                system_theme
            }),
            Ok(None) => system_theme,
            Err(e) => {
                tracing::warn!("Failed to read theme, using system preference: {}", e);
                system_theme
            }
        }
    }

    /// Persist the theme as `light` or `dark`
    pub fn save_theme(&mut self, theme: Theme) {
        if let Err(e) = self.storage.set(&self.keys.theme, theme.as_str()) {
            tracing::error!("Failed to persist theme: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::storage::{MemoryKeyValueStore, StorageError};

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    fn store_with(entries: &[(&str, &str)]) -> PreferenceStore {
        let mut storage = MemoryKeyValueStore::new();
        for (key, value) in entries {
            storage.set(key, value).unwrap();
        }
        PreferenceStore::with_default_keys(Box::new(storage))
    }

    #[test]
    fn test_missing_entries_use_defaults() {
        let store = store_with(&[]);
        assert!(store.load_favorites().is_empty());
        assert_eq!(store.load_theme(Theme::Dark), Theme::Dark);
        assert_eq!(store.load_theme(Theme::Light), Theme::Light);
    }

    #[test]
    fn test_malformed_entries_use_defaults() {
        let store = store_with(&[(FAVORITES_KEY, "{\"1\": true}"), (THEME_KEY, "sepia")]);
        assert!(store.load_favorites().is_empty());
        assert_eq!(store.load_theme(Theme::Dark), Theme::Dark);

        let store = store_with(&[(FAVORITES_KEY, "not json")]);
        assert!(store.load_favorites().is_empty());
    }

    #[test]
    fn test_round_trip_through_storage() {
        let mut store = store_with(&[]);
        let favorites: FavoriteSet = ["2", "1"].iter().map(|s| s.to_string()).collect();

        store.save_favorites(&favorites);
        store.save_theme(Theme::Dark);

        assert_eq!(store.load_favorites(), favorites);
        assert_eq!(store.load_theme(Theme::Light), Theme::Dark);
    }

    #[test]
    fn test_stored_values_use_documented_encoding() {
        let mut storage = MemoryKeyValueStore::new();
        storage.set(FAVORITES_KEY, r#"["1","4"]"#).unwrap();
        storage.set(THEME_KEY, "dark").unwrap();
        let store = PreferenceStore::with_default_keys(Box::new(storage));

        assert_eq!(store.load_favorites().as_slice(), &["1".to_string(), "4".to_string()]);
        assert_eq!(store.load_theme(Theme::Light), Theme::Dark);
    }

    #[test]
    fn test_broken_storage_never_fails() {
        let mut store = PreferenceStore::with_default_keys(Box::new(BrokenStore));
        assert!(store.load_favorites().is_empty());
        assert_eq!(store.load_theme(Theme::Light), Theme::Light);

        store.save_favorites(&FavoriteSet::new());
        store.save_theme(Theme::Dark);
    }
}
