//! Tests for Configuration Module

use super::*;
use crate::core::CURRENT_VERSION;
use crate::logging::LogLevel;
use tempfile::TempDir;

/// Create a test config store with temporary directory
async fn create_test_store() -> (ConfigStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let settings = ConfigStoreConfig::at(temp_dir.path().join("config.json"));
    let store = ConfigStore::new(settings).await.unwrap();
    (store, temp_dir)
}

#[tokio::test]
async fn test_create_default_config() {
    let (store, _temp) = create_test_store().await;

    let config = store.get().await;
    assert_eq!(config.version, 1);
    assert_eq!(config.updater.current_version.as_str(), CURRENT_VERSION);
    assert_eq!(config.updater.version_element_id, "version");
    assert_eq!(config.updater.check_button_id, "checkForUpdatesSubmit");
    assert!(!config.updater.release_feed.enabled);
    assert!(config.language_file.is_none());
    assert!(store.config_path().exists());
}

#[tokio::test]
async fn test_update_config_persists() {
    let (store, temp) = create_test_store().await;

    let updated = store
        .update(|config| {
            config.updater.debug = false;
            config.logging.level = LogLevel::Warn;
        })
        .await
        .unwrap();
    assert!(!updated.updater.debug);

    // A fresh store over the same file sees the change
    let reopened = ConfigStore::new(ConfigStoreConfig::at(temp.path().join("config.json")))
        .await
        .unwrap();
    let reloaded = reopened.get().await;
    assert!(!reloaded.updater.debug);
    assert_eq!(reloaded.logging.level, LogLevel::Warn);
}

#[tokio::test]
async fn test_invalid_update_is_rejected() {
    let (store, _temp) = create_test_store().await;

    let result = store
        .update(|config| config.updater.check_button_id.clear())
        .await;
    assert!(matches!(result, Err(ConfigError::Invalid(_))));

    // Previous value survives
    assert_eq!(store.get().await.updater.check_button_id, "checkForUpdatesSubmit");
}

#[tokio::test]
async fn test_reset_config() {
    let (store, _temp) = create_test_store().await;
    store
        .update(|config| config.updater.debug = false)
        .await
        .unwrap();

    let reset = store.reset().await.unwrap();
    assert!(reset.updater.debug);
}

#[tokio::test]
async fn test_missing_config_without_default() {
    let temp_dir = TempDir::new().unwrap();
    let settings = ConfigStoreConfig {
        config_path: temp_dir.path().join("absent.json"),
        create_default: false,
    };
    let result = ConfigStore::new(settings).await;
    assert!(matches!(result, Err(ConfigError::NotFound(_))));
}

#[tokio::test]
async fn test_partial_file_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    tokio::fs::write(&path, r#"{"updater": {"current_version": "2.0.0"}}"#)
        .await
        .unwrap();

    let store = ConfigStore::new(ConfigStoreConfig::at(&path)).await.unwrap();
    let config = store.get().await;
    assert_eq!(config.updater.current_version.as_str(), "2.0.0");
    assert_eq!(config.updater.version_element_id, "version");
    assert!(config.updater.debug);
}

#[tokio::test]
async fn test_malformed_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    tokio::fs::write(&path, "{not json").await.unwrap();

    let result = ConfigStore::new(ConfigStoreConfig::at(&path)).await;
    assert!(matches!(result, Err(ConfigError::Json(_))));
}

#[test]
fn test_feed_enabled_without_url_is_invalid() {
    let mut config = AppConfig::default();
    config.updater.release_feed.enabled = true;
    config.updater.release_feed.url.clear();
    assert!(config.validate().is_err());
}
