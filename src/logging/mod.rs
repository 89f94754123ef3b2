//! Logging System
//!
//! Structured `tracing` logs with configurable verbosity, written to stderr,
//! a rolling file, or both. Stdout stays free for the signal wire.

mod config;

#[cfg(test)]
mod tests;

pub use config::{LogFormat, LogLevel, LogOutput, LoggingConfig, RotationStrategy};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

pub const LOG_FILE_NAME: &str = "update-notifier.log";

/// Logging system errors
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Failed to initialize logging: {0}")]
    InitializationError(String),

    #[error("Failed to create log directory: {0}")]
    DirectoryCreationError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for logging operations
pub type LoggingResult<T> = Result<T, LoggingError>;

/// Installed subscriber; keeps the file writer alive
pub struct LoggingSystem {
    config: LoggingConfig,
    _guards: Vec<WorkerGuard>,
}

impl LoggingSystem {
    /// Initialize the global subscriber with the given configuration
    pub fn init(config: LoggingConfig) -> LoggingResult<Self> {
        let mut guards = Vec::new();
        let env_filter = Self::build_env_filter(&config);
        let registry = tracing_subscriber::registry();

        match config.output {
            LogOutput::Console => {
                registry
                    .with(env_filter)
                    .with(Self::create_console_layer(&config))
                    .try_init()
                    .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
            }
            LogOutput::File => {
                let (file_layer, guard) = Self::create_file_layer(&config)?;
                guards.push(guard);
                registry
                    .with(env_filter)
                    .with(file_layer)
                    .try_init()
                    .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
            }
            LogOutput::Both => {
                let (file_layer, guard) = Self::create_file_layer(&config)?;
                guards.push(guard);
                registry
                    .with(env_filter)
                    .with(Self::create_console_layer(&config))
                    .with(file_layer)
                    .try_init()
                    .map_err(|e| LoggingError::InitializationError(e.to_string()))?;
            }
        }

        Ok(Self {
            config,
            _guards: guards,
        })
    }

    /// Build environment filter from configuration
    fn build_env_filter(config: &LoggingConfig) -> EnvFilter {
        let mut filter = EnvFilter::new(config.level.to_string());

        for (module, level) in &config.module_levels {
            match format!("{}={}", module, level).parse::<Directive>() {
                Ok(directive) => filter = filter.add_directive(directive),
                Err(e) => eprintln!("Ignoring log directive for {}: {}", module, e),
            }
        }

        filter
    }

    /// Create stderr logging layer
    fn create_console_layer<S>(config: &LoggingConfig) -> Box<dyn Layer<S> + Send + Sync>
    where
        S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        let layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(config.include_target)
            .with_file(config.include_file_info)
            .with_line_number(config.include_file_info);

        if config.format == LogFormat::Json {
            layer.json().boxed()
        } else {
            layer.boxed()
        }
    }

    /// Create file logging layer with rotation
    fn create_file_layer<S>(
        config: &LoggingConfig,
    ) -> LoggingResult<(Box<dyn Layer<S> + Send + Sync>, WorkerGuard)>
    where
        S: tracing::Subscriber + for<'a> tracing_subscriber::registry::LookupSpan<'a>,
    {
        let log_dir = config.resolved_log_directory();
        std::fs::create_dir_all(&log_dir).map_err(|e| {
            LoggingError::DirectoryCreationError(format!("{:?}: {}", log_dir, e))
        })?;

        let rotation = match config.rotation {
            RotationStrategy::Daily => Rotation::DAILY,
            RotationStrategy::Hourly => Rotation::HOURLY,
            RotationStrategy::Never => Rotation::NEVER,
        };

        let file_appender = RollingFileAppender::new(rotation, &log_dir, LOG_FILE_NAME);
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let layer = fmt::layer()
            .with_writer(non_blocking)
            .with_target(config.include_target)
            .with_file(config.include_file_info)
            .with_line_number(config.include_file_info)
            .with_ansi(false); // No ANSI colors in file output

        if config.format == LogFormat::Json {
            Ok((layer.json().boxed(), guard))
        } else {
            Ok((layer.boxed(), guard))
        }
    }

    /// Get current log level
    pub fn log_level(&self) -> LogLevel {
        self.config.level
    }

    /// Directory of the log file, when file output is on
    pub fn log_directory(&self) -> Option<std::path::PathBuf> {
        match self.config.output {
            LogOutput::Console => None,
            LogOutput::File | LogOutput::Both => Some(self.config.resolved_log_directory()),
        }
    }
}

/// Fallback when the configured system cannot be installed
pub fn init_basic_logging(level: LogLevel) {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(level.to_tracing_level().into()),
        )
        .try_init();
}
