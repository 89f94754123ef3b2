//! Core module for the update notifier
//!
//! This module contains:
//! - Error types and recovery strategies
//! - The application version string

pub mod error;
pub mod version;

// Re-export commonly used items
pub use error::{NotifierError, RecoveryAction, Result};
pub use version::{AppVersion, CURRENT_VERSION};
