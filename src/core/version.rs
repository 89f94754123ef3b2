//! Application version string
//!
//! The version is compared for exact equality only. It is never parsed or
//! ordered.

use serde::{Deserialize, Serialize};

/// Version of the running application
pub const CURRENT_VERSION: &str = "1.8.0-beta.4";

/// Immutable version string of the running application
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AppVersion(String);

impl AppVersion {
    pub fn new(version: impl Into<String>) -> Self {
        Self(version.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Exact string match against a version reported by the update channel
    pub fn matches(&self, reported: &str) -> bool {
        self.0 == reported
    }
}

impl Default for AppVersion {
    fn default() -> Self {
        Self::new(CURRENT_VERSION)
    }
}

impl std::fmt::Display for AppVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
