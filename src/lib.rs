//! Update notifier - update lifecycle notifications for the optimizer desktop app
//!
//! This crate provides:
//! - The `UpdateNotifier` component relaying updater signals to the user
//! - Capability traits for dialogs, toasts, localization and UI elements
//! - A signal bridge and JSON-lines wire codec for the privileged process
//! - String catalogs, persisted configuration and structured logging

pub mod config;
pub mod console;
pub mod core;
pub mod i18n;
pub mod ipc;
pub mod logging;
pub mod update;

// Re-export commonly used items
pub use crate::config::{AppConfig, ConfigStore, ConfigStoreConfig};
pub use crate::core::{AppVersion, NotifierError, Result, CURRENT_VERSION};
pub use crate::i18n::Catalog;
pub use crate::ipc::{run_listener, SignalBridge};
pub use crate::update::{
    InboundSignal, OutboundSignal, Services, SignalOutcome, UpdateNotifier, UpdaterConfig,
};
