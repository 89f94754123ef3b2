//! Error types for the update notifier
//!
//! Every failure the notifier can observe is soft: it is either recovered
//! locally (logged and downgraded to a notice) or surfaced to the host.

use thiserror::Error;

use crate::config::ConfigError;

/// Result type alias for notifier operations
pub type Result<T> = std::result::Result<T, NotifierError>;

/// Main error type for the update notifier
#[derive(Error, Debug)]
pub enum NotifierError {
    #[error("Failed to decode update payload: {reason}")]
    PayloadDecode { reason: String },

    #[error("Unknown signal channel: {channel}")]
    UnknownSignal { channel: String },

    #[error("Signal channel closed")]
    ChannelClosed,

    #[error("Signal queue full, dropped {signal}")]
    ChannelFull { signal: String },

    #[error("Dialog failed: {reason}")]
    Dialog { reason: String },

    #[error("Worker process error: {reason}")]
    Worker { reason: String },

    #[error("Dataset refresh failed: {reason}")]
    Dataset { reason: String },

    #[error("Release feed error: {0}")]
    ReleaseFeed(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// What a handler does after observing an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoveryAction {
    /// Log the failure and continue with the rest of the flow
    LogAndContinue,
    /// Hand the error back to the caller
    Propagate,
}

impl NotifierError {
    /// Whether the host keeps serving after this error
    pub fn recovery_action(&self) -> RecoveryAction {
        match self {
            NotifierError::PayloadDecode { .. }
            | NotifierError::ChannelFull { .. }
            | NotifierError::Dataset { .. }
            | NotifierError::Worker { .. }
            | NotifierError::Dialog { .. }
            | NotifierError::ReleaseFeed(_) => RecoveryAction::LogAndContinue,
            NotifierError::UnknownSignal { .. }
            | NotifierError::ChannelClosed
            | NotifierError::Config(_)
            | NotifierError::Io(_)
            | NotifierError::Json(_) => RecoveryAction::Propagate,
        }
    }

    pub(crate) fn decode(reason: impl std::fmt::Display) -> Self {
        NotifierError::PayloadDecode {
            reason: reason.to_string(),
        }
    }
}
