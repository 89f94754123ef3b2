//! Configuration Management Module
//!
//! Provides persistent configuration storage with:
//! - JSON file-based storage
//! - Atomic writes through a temp file
//! - Thread-safe access

mod storage;
#[cfg(test)]
mod tests;

pub use storage::{AppConfig, ConfigError, ConfigResult, ConfigStore, ConfigStoreConfig};
