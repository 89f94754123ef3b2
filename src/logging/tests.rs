//! Tests for the logging system

use super::*;
use std::path::PathBuf;

#[test]
fn test_log_level_display() {
    assert_eq!(LogLevel::Trace.to_string(), "trace");
    assert_eq!(LogLevel::Debug.to_string(), "debug");
    assert_eq!(LogLevel::Info.to_string(), "info");
    assert_eq!(LogLevel::Warn.to_string(), "warn");
    assert_eq!(LogLevel::Error.to_string(), "error");
}

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, LogLevel::Info);
    assert_eq!(config.format, LogFormat::Text);
    assert_eq!(config.output, LogOutput::Console);
    assert_eq!(config.rotation, RotationStrategy::Daily);
    assert!(config.include_target);
    assert!(!config.include_file_info);
}

#[test]
fn test_logging_config_builder() {
    let config = LoggingConfig::new()
        .with_level(LogLevel::Debug)
        .with_format(LogFormat::Json)
        .with_output(LogOutput::File)
        .with_log_directory(PathBuf::from("/tmp/notifier-logs"))
        .with_module_level("update_notifier::ipc", LogLevel::Trace);

    assert_eq!(config.level, LogLevel::Debug);
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.output, LogOutput::File);
    assert_eq!(
        config.resolved_log_directory(),
        PathBuf::from("/tmp/notifier-logs")
    );
    assert_eq!(
        config.module_levels.get("update_notifier::ipc"),
        Some(&LogLevel::Trace)
    );
}

#[test]
fn test_logging_config_presets() {
    let dev = LoggingConfig::development();
    assert_eq!(dev.level, LogLevel::Debug);
    assert_eq!(dev.output, LogOutput::Console);
    assert!(dev.include_file_info);

    let prod = LoggingConfig::production();
    assert_eq!(prod.format, LogFormat::Json);
    assert_eq!(prod.output, LogOutput::Both);
    assert!(prod.log_directory.is_some());
}

#[test]
fn test_logging_config_deserialize_partial() {
    let config: LoggingConfig =
        serde_json::from_str(r#"{"level": "warn", "rotation": "hourly"}"#).unwrap();
    assert_eq!(config.level, LogLevel::Warn);
    assert_eq!(config.rotation, RotationStrategy::Hourly);
    assert_eq!(config.output, LogOutput::Console);
    assert!(config.include_target);
}

#[test]
fn test_env_filter_accepts_module_levels() {
    let config = LoggingConfig::new()
        .with_module_level("update_notifier::update", LogLevel::Trace)
        .with_module_level("reqwest", LogLevel::Warn);
    let filter = LoggingSystem::build_env_filter(&config);
    let rendered = filter.to_string();
    assert!(rendered.contains("update_notifier::update"));
    assert!(rendered.contains("reqwest"));
}
