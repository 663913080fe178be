//! # Application Configuration
//!
//! Endpoint, paging, modal and storage settings of the CLI host.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     FORKIFY_API_URL=https://...                                        │
//! │     FORKIFY_API_KEY=...                                                │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     --config <path>, or                                                │
//! │     ~/.config/forkify/forkify.toml (Linux)                             │
//! │     ~/Library/Application Support/com.forkify.forkify/forkify.toml     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # forkify.toml
//! [api]
//! url = "https://forkify-api.herokuapp.com/api/v2/recipes"
//! key = "your-api-key"
//! timeout_secs = 10
//!
//! [ui]
//! results_per_page = 10
//! modal_close_ms = 2500
//!
//! [storage]
//! data_dir = "/var/lib/forkify"
//! bookmarks_key = "bookmarks"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use forkify_client::{ClientConfig, DEFAULT_API_URL, DEFAULT_TIMEOUT_SECS};
use forkify_core::{BOOKMARKS_KEY, RESULTS_PER_PAGE};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

// =============================================================================
// Config Errors
// =============================================================================

/// Failures while loading the configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// API Settings
// =============================================================================

/// Recipe service endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Base URL of the recipe collection.
    #[serde(default = "default_api_url")]
    pub url: String,

    /// API key sent with every request. Also marks uploads as owned.
    #[serde(default)]
    pub key: Option<String>,

    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for ApiSettings {
    fn default() -> Self {
        ApiSettings {
            url: default_api_url(),
            key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

// =============================================================================
// UI Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Search results per page.
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,

    /// Delay before the upload window closes after a successful upload
    /// (milliseconds).
    #[serde(default = "default_modal_close_ms")]
    pub modal_close_ms: u64,
}

fn default_results_per_page() -> usize {
    RESULTS_PER_PAGE
}

fn default_modal_close_ms() -> u64 {
    2500
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            results_per_page: default_results_per_page(),
            modal_close_ms: default_modal_close_ms(),
        }
    }
}

// =============================================================================
// Storage Settings
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StorageSettings {
    /// Directory of the key-value files. Platform data dir when unset.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,

    /// Key of the bookmark blob.
    #[serde(default = "default_bookmarks_key")]
    pub bookmarks_key: String,
}

fn default_bookmarks_key() -> String {
    BOOKMARKS_KEY.to_string()
}

impl Default for StorageSettings {
    fn default() -> Self {
        StorageSettings {
            data_dir: None,
            bookmarks_key: default_bookmarks_key(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiSettings,

    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub storage: StorageSettings,
}

impl AppConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (forkify.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|name| std::env::var(name).ok());
        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.api.url.starts_with("http://") && !self.api.url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "API URL must start with http:// or https://, got: {}",
                self.api.url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        if self.ui.results_per_page == 0 {
            return Err(ConfigError::Invalid(
                "results_per_page must be greater than 0".into(),
            ));
        }

        if self.storage.bookmarks_key.trim().is_empty() {
            return Err(ConfigError::Invalid("bookmarks_key must not be empty".into()));
        }

        Ok(())
    }

    /// Applies `FORKIFY_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("FORKIFY_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.api.url = url;
        }

        if let Some(key) = lookup("FORKIFY_API_KEY") {
            debug!("Overriding API key from environment");
            self.api.key = Some(key);
        }

        if let Some(secs) = lookup("FORKIFY_TIMEOUT_SECS") {
            match secs.parse::<u64>() {
                Ok(s) => self.api.timeout_secs = s,
                Err(_) => warn!(value = %secs, "Ignoring non-numeric FORKIFY_TIMEOUT_SECS"),
            }
        }

        if let Some(per_page) = lookup("FORKIFY_RESULTS_PER_PAGE") {
            if let Ok(n) = per_page.parse::<usize>() {
                self.ui.results_per_page = n;
            }
        }

        if let Some(ms) = lookup("FORKIFY_MODAL_CLOSE_MS") {
            if let Ok(n) = ms.parse::<u64>() {
                self.ui.modal_close_ms = n;
            }
        }

        if let Some(dir) = lookup("FORKIFY_DATA_DIR") {
            debug!(dir = %dir, "Overriding data dir from environment");
            self.storage.data_dir = Some(PathBuf::from(dir));
        }

        if let Some(key) = lookup("FORKIFY_BOOKMARKS_KEY") {
            self.storage.bookmarks_key = key;
        }
    }

    fn project_dirs() -> Option<directories::ProjectDirs> {
        directories::ProjectDirs::from("com", "forkify", "forkify")
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("forkify.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Directory the bookmark file lives in.
    pub fn data_dir(&self) -> ConfigResult<PathBuf> {
        self.storage
            .data_dir
            .clone()
            .or_else(|| Self::project_dirs().map(|dirs| dirs.data_dir().to_path_buf()))
            .ok_or_else(|| ConfigError::Invalid("No data directory available".into()))
    }

    pub fn modal_close_delay(&self) -> Duration {
        Duration::from_millis(self.ui.modal_close_ms)
    }

    /// Settings of the remote data client.
    pub fn client_config(&self) -> ClientConfig {
        let config = ClientConfig::new(self.api.url.clone())
            .timeout(Duration::from_secs(self.api.timeout_secs));
        match &self.api.key {
            Some(key) => config.api_key(key.clone()),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.ui.results_per_page, 10);
        assert_eq!(config.ui.modal_close_ms, 2500);
        assert_eq!(config.storage.bookmarks_key, "bookmarks");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = AppConfig::default();

        config.api.url = "ftp://recipes".to_string();
        assert!(config.validate().is_err());

        config.api.url = "http://localhost:3000/recipes".to_string();
        assert!(config.validate().is_ok());

        config.api.timeout_secs = 0;
        assert!(config.validate().is_err());

        config.api.timeout_secs = 5;
        config.ui.results_per_page = 0;
        assert!(config.validate().is_err());

        config.ui.results_per_page = 5;
        config.storage.bookmarks_key = " ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forkify.toml");
        std::fs::write(
            &path,
            "[api]\nkey = \"abc\"\n\n[ui]\nresults_per_page = 5\n",
        )
        .unwrap();

        let config = AppConfig::load(Some(path)).unwrap();
        assert_eq!(config.api.key.as_deref(), Some("abc"));
        assert_eq!(config.api.url, DEFAULT_API_URL);
        assert_eq!(config.ui.results_per_page, 5);
        assert_eq!(config.ui.modal_close_ms, 2500);
    }

    #[test]
    fn test_load_rejects_invalid_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("forkify.toml");
        std::fs::write(&path, "[ui]\nresults_per_page = 0\n").unwrap();

        assert!(matches!(
            AppConfig::load(Some(path)),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("FORKIFY_API_URL", "http://localhost:9000/recipes"),
            ("FORKIFY_API_KEY", "k-1"),
            ("FORKIFY_TIMEOUT_SECS", "not-a-number"),
            ("FORKIFY_MODAL_CLOSE_MS", "0"),
            ("FORKIFY_DATA_DIR", "/tmp/forkify"),
        ]
        .into_iter()
        .collect();

        let mut config = AppConfig::default();
        config.apply_overrides(|name| vars.get(name).map(|v| v.to_string()));

        assert_eq!(config.api.url, "http://localhost:9000/recipes");
        assert_eq!(config.api.key.as_deref(), Some("k-1"));
        assert_eq!(config.api.timeout_secs, 10);
        assert_eq!(config.modal_close_delay(), Duration::ZERO);
        assert_eq!(config.data_dir().unwrap(), PathBuf::from("/tmp/forkify"));
    }

    #[test]
    fn test_client_config() {
        let mut config = AppConfig::default();
        config.api.key = Some("secret".to_string());
        config.api.timeout_secs = 3;

        let client = config.client_config();
        assert_eq!(client.base_url, DEFAULT_API_URL);
        assert_eq!(client.api_key.as_deref(), Some("secret"));
        assert_eq!(client.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AppConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
