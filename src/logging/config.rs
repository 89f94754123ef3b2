//! Logging configuration types

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Log verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable text format
    #[default]
    Text,
    /// Structured JSON format for machine parsing
    Json,
}

/// Log output destination
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogOutput {
    /// Output to stderr only
    #[default]
    Console,
    /// Output to file only
    File,
    /// Output to both stderr and file
    Both,
}

/// When the log file rolls over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategy {
    #[default]
    Daily,
    Hourly,
    Never,
}

/// Main logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Global log level
    #[serde(default)]
    pub level: LogLevel,

    /// Log output format
    #[serde(default)]
    pub format: LogFormat,

    /// Log output destination
    #[serde(default)]
    pub output: LogOutput,

    /// Directory for log files (if file output is enabled)
    #[serde(default)]
    pub log_directory: Option<PathBuf>,

    /// Module-specific log levels
    #[serde(default)]
    pub module_levels: HashMap<String, LogLevel>,

    /// Include target (module path) in log output
    #[serde(default = "default_true")]
    pub include_target: bool,

    /// Include file and line number in log output
    #[serde(default)]
    pub include_file_info: bool,

    /// Log file rollover
    #[serde(default)]
    pub rotation: RotationStrategy,
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Text,
            output: LogOutput::Console,
            log_directory: None,
            module_levels: HashMap::new(),
            include_target: true,
            include_file_info: false,
            rotation: RotationStrategy::Daily,
        }
    }
}

impl LoggingConfig {
    /// Create a new logging configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the global log level
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the log format
    pub fn with_format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Set the log output destination
    pub fn with_output(mut self, output: LogOutput) -> Self {
        self.output = output;
        self
    }

    /// Set the log directory
    pub fn with_log_directory(mut self, dir: PathBuf) -> Self {
        self.log_directory = Some(dir);
        self
    }

    /// Add a module-specific log level
    pub fn with_module_level(mut self, module: impl Into<String>, level: LogLevel) -> Self {
        self.module_levels.insert(module.into(), level);
        self
    }

    /// Create a development configuration with verbose logging
    pub fn development() -> Self {
        Self {
            level: LogLevel::Debug,
            include_file_info: true,
            ..Self::default()
        }
    }

    /// Create a production configuration with structured logging
    pub fn production() -> Self {
        Self {
            level: LogLevel::Info,
            format: LogFormat::Json,
            output: LogOutput::Both,
            log_directory: Some(default_log_directory()),
            ..Self::default()
        }
    }

    /// Directory used for file output
    pub fn resolved_log_directory(&self) -> PathBuf {
        self.log_directory
            .clone()
            .unwrap_or_else(default_log_directory)
    }
}

/// Get the default log directory based on the platform
fn default_log_directory() -> PathBuf {
    if let Some(data_dir) = dirs::data_local_dir() {
        data_dir.join("update-notifier").join("logs")
    } else {
        PathBuf::from("logs")
    }
}
