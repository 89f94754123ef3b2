//! Configuration Storage Implementation
//!
//! Provides JSON file-based configuration storage with:
//! - Atomic writes using temp file + rename
//! - Thread-safe access via RwLock
//! - Default configuration generation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::logging::LoggingConfig;
use crate::update::{UpdaterConfig, WorkerConfig};

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration store settings
#[derive(Debug, Clone)]
pub struct ConfigStoreConfig {
    /// Path to the configuration file
    pub config_path: PathBuf,
    /// Whether to create default config if not exists
    pub create_default: bool,
}

impl ConfigStoreConfig {
    pub fn at(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            create_default: true,
        }
    }
}

impl Default for ConfigStoreConfig {
    fn default() -> Self {
        let app_data = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("update-notifier");

        Self::at(app_data.join("config.json"))
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Configuration format version
    #[serde(default = "default_version")]
    pub version: u32,

    /// Update notifier settings
    #[serde(default)]
    pub updater: UpdaterConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// String catalog for the UI language; keys are shown untranslated when unset
    #[serde(default)]
    pub language_file: Option<PathBuf>,

    /// Background worker stopped before a restart
    #[serde(default)]
    pub worker: Option<WorkerConfig>,

    /// Last modified timestamp
    #[serde(default = "default_timestamp")]
    pub last_modified: String,
}

fn default_version() -> u32 {
    1
}

fn default_timestamp() -> String {
    chrono::Utc::now().to_rfc3339()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: default_version(),
            updater: UpdaterConfig::default(),
            logging: LoggingConfig::default(),
            language_file: None,
            worker: None,
            last_modified: default_timestamp(),
        }
    }
}

impl AppConfig {
    /// Reject values the notifier cannot work with
    pub fn validate(&self) -> ConfigResult<()> {
        if self.updater.current_version.as_str().trim().is_empty() {
            return Err(ConfigError::Invalid("updater.current_version is empty".to_string()));
        }
        if self.updater.version_element_id.is_empty() {
            return Err(ConfigError::Invalid("updater.version_element_id is empty".to_string()));
        }
        if self.updater.check_button_id.is_empty() {
            return Err(ConfigError::Invalid("updater.check_button_id is empty".to_string()));
        }
        if self.updater.release_feed.enabled && self.updater.release_feed.url.is_empty() {
            return Err(ConfigError::Invalid(
                "updater.release_feed.url is required when the feed is enabled".to_string(),
            ));
        }
        Ok(())
    }
}

/// Configuration store with thread-safe access
pub struct ConfigStore {
    config: Arc<RwLock<AppConfig>>,
    settings: ConfigStoreConfig,
}

impl ConfigStore {
    /// Create a new configuration store
    pub async fn new(settings: ConfigStoreConfig) -> ConfigResult<Self> {
        // Ensure directories exist
        if let Some(parent) = settings.config_path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }

        // Load or create config
        let config = if settings.config_path.exists() {
            Self::load_from_file(&settings.config_path).await?
        } else if settings.create_default {
            let default_config = AppConfig::default();
            Self::save_to_file(&settings.config_path, &default_config).await?;
            default_config
        } else {
            return Err(ConfigError::NotFound(settings.config_path.clone()));
        };
        config.validate()?;

        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            settings,
        })
    }

    /// Load configuration from file
    async fn load_from_file(path: &Path) -> ConfigResult<AppConfig> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to file with atomic write
    async fn save_to_file(path: &Path, config: &AppConfig) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(config)?;

        // Write to temp file first
        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, &content).await?;

        // Atomic rename
        tokio::fs::rename(&temp_path, path).await?;

        Ok(())
    }

    /// Get current configuration (read-only)
    pub async fn get(&self) -> AppConfig {
        self.config.read().await.clone()
    }

    /// Update configuration
    pub async fn update<F>(&self, updater: F) -> ConfigResult<AppConfig>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut config = self.config.write().await;

        let mut candidate = config.clone();
        updater(&mut candidate);
        candidate.validate()?;
        candidate.last_modified = chrono::Utc::now().to_rfc3339();

        Self::save_to_file(&self.settings.config_path, &candidate).await?;
        *config = candidate;

        Ok(config.clone())
    }

    /// Reset to default configuration
    pub async fn reset(&self) -> ConfigResult<AppConfig> {
        self.update(|config| *config = AppConfig::default()).await
    }

    /// Get configuration file path
    pub fn config_path(&self) -> &Path {
        &self.settings.config_path
    }
}
