//! Update notifier configuration

use serde::{Deserialize, Serialize};

use crate::core::AppVersion;

/// Configuration for the update notifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// Version of the running application
    #[serde(default)]
    pub current_version: AppVersion,

    /// Trace raw signal payloads at info level instead of debug
    #[serde(default = "default_debug")]
    pub debug: bool,

    /// Element that shows the current version
    #[serde(default = "default_version_element")]
    pub version_element_id: String,

    /// Button that starts a manual update check
    #[serde(default = "default_check_button")]
    pub check_button_id: String,

    /// Optional lookup of the public release feed
    #[serde(default)]
    pub release_feed: ReleaseFeedConfig,
}

fn default_debug() -> bool {
    true
}

fn default_version_element() -> String {
    "version".to_string()
}

fn default_check_button() -> String {
    "checkForUpdatesSubmit".to_string()
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            current_version: AppVersion::default(),
            debug: default_debug(),
            version_element_id: default_version_element(),
            check_button_id: default_check_button(),
            release_feed: ReleaseFeedConfig::default(),
        }
    }
}

impl UpdaterConfig {
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = AppVersion::new(version);
        self
    }

    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Latest-release lookup against a GitHub-style releases API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseFeedConfig {
    #[serde(default)]
    pub enabled: bool,

    /// API endpoint returning the latest release as JSON
    #[serde(default = "default_feed_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_feed_url() -> String {
    "https://api.github.com/repos/fribbels/Fribbels-Epic-7-Optimizer/releases/latest".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for ReleaseFeedConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: default_feed_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
