use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use crate::models::Theme;
use crate::services::bio_assist::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::services::preferences::{PreferenceKeys, FAVORITES_KEY, THEME_KEY};

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub appearance: AppearanceSettings,
    #[serde(default)]
    pub catalog: CatalogSettings,
    #[serde(default)]
    pub bio_assist: BioAssistSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

/// Where favorites and theme are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default)]
    pub backend: StorageBackend,
    #[serde(default = "default_storage_path")]
    pub path: String,
    #[serde(default = "default_favorites_key")]
    pub favorites_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: default_storage_path(),
            favorites_key: default_favorites_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl StorageSettings {
    pub fn keys(&self) -> PreferenceKeys {
        PreferenceKeys {
            favorites: self.favorites_key.clone(),
            theme: self.theme_key.clone(),
        }
    }
}

fn default_storage_path() -> String { "data/local_storage.json".to_string() }
fn default_favorites_key() -> String { FAVORITES_KEY.to_string() }
fn default_theme_key() -> String { THEME_KEY.to_string() }

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppearanceSettings {
    /// Color scheme of the host environment, used until a theme is stored
    #[serde(default)]
    pub system_theme: Theme,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogSettings {
    #[serde(default = "default_true")]
    pub seed_sample_data: bool,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self { seed_sample_data: true }
    }
}

fn default_true() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct BioAssistSettings {
    pub api_key: Option<String>,
    #[serde(default = "default_bio_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_bio_model")]
    pub model: String,
    #[serde(default = "default_bio_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_max_tracked_requests")]
    pub max_tracked_requests: usize,
}

impl Default for BioAssistSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: default_bio_endpoint(),
            model: default_bio_model(),
            timeout_secs: default_bio_timeout(),
            max_tracked_requests: default_max_tracked_requests(),
        }
    }
}

impl BioAssistSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_bio_endpoint() -> String { DEFAULT_ENDPOINT.to_string() }
fn default_bio_model() -> String { DEFAULT_MODEL.to_string() }
fn default_bio_timeout() -> u64 { 30 }
fn default_max_tracked_requests() -> usize { 256 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with FREELANCMUSIC_)
    /// 5. `API_KEY` for the bio assist key
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., FREELANCMUSIC__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FREELANCMUSIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let settings = apply_api_key_override(settings, std::env::var("API_KEY").ok())?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FREELANCMUSIC")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Let a plain `API_KEY` variable configure the bio assist
fn apply_api_key_override(settings: Config, api_key: Option<String>) -> Result<Config, ConfigError> {
    match api_key.filter(|key| !key.is_empty()) {
        Some(key) => Config::builder()
            .add_source(settings)
            .set_override("bio_assist.api_key", key)?
            .build(),
        None => Ok(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.storage.backend, StorageBackend::File);
        assert_eq!(settings.storage.favorites_key, "freelancmusic_favorites");
        assert_eq!(settings.storage.theme_key, "theme");
        assert_eq!(settings.appearance.system_theme, Theme::Light);
        assert!(settings.catalog.seed_sample_data);
        assert_eq!(settings.bio_assist.model, "gemini-2.5-flash");
        assert!(settings.bio_assist.api_key.is_none());
    }

    #[test]
    fn test_default_logging() {
        assert_eq!(default_log_level(), "info");
        assert_eq!(default_log_format(), "pretty");
    }

    #[test]
    fn test_load_from_partial_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[storage]\nbackend = \"memory\"\n\n[appearance]\nsystem_theme = \"dark\"\n\n[bio_assist]\nmodel = \"gemini-test\""
        )
        .unwrap();

        let settings = Settings::load_from(file.path()).unwrap();
        assert_eq!(settings.storage.backend, StorageBackend::Memory);
        assert_eq!(settings.appearance.system_theme, Theme::Dark);
        assert_eq!(settings.bio_assist.model, "gemini-test");
        assert_eq!(settings.bio_assist.timeout_secs, 30);
        assert_eq!(settings.server.host, "127.0.0.1");
    }

    #[test]
    fn test_api_key_override() {
        let base = Config::builder().build().unwrap();
        let settings: Settings = apply_api_key_override(base, Some("secret".to_string()))
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(settings.bio_assist.api_key.as_deref(), Some("secret"));

        let base = Config::builder().build().unwrap();
        let settings: Settings = apply_api_key_override(base, Some(String::new()))
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert!(settings.bio_assist.api_key.is_none());
    }
}
