//! Latest-release lookup
//!
//! Independent of the privileged updater: asks a GitHub-style releases API
//! for the newest tag and compares it to the running version.

use std::time::Duration;

use serde::Deserialize;

use super::config::ReleaseFeedConfig;
use crate::core::{AppVersion, Result};

/// Subset of the releases API response
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LatestRelease {
    pub tag_name: String,
}

impl LatestRelease {
    /// Tag without the conventional leading `v`
    pub fn version(&self) -> &str {
        self.tag_name.trim_start_matches('v')
    }

    pub fn differs_from(&self, current: &AppVersion) -> bool {
        !current.matches(self.version())
    }
}

/// HTTP client bound to one release feed
pub struct ReleaseFeed {
    client: reqwest::Client,
    config: ReleaseFeedConfig,
}

impl ReleaseFeed {
    pub fn new(config: ReleaseFeedConfig, current_version: &AppVersion) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(format!("update-notifier/{}", current_version))
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch the latest published release
    pub async fn latest(&self) -> Result<LatestRelease> {
        let release = self
            .client
            .get(&self.config.url)
            .send()
            .await?
            .error_for_status()?
            .json::<LatestRelease>()
            .await?;
        Ok(release)
    }
}

/// Dialog body announcing a release
///
/// `link_open` is the localized lead-in ending in the opening anchor tag.
pub fn new_version_html(link_open: &str, tag: &str) -> String {
    format!("{link_open}{tag}</a>")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_latest_release() {
        let body = r#"{"tag_name":"v1.9.0","html_url":"https://example.com/r/1.9.0","assets":[]}"#;
        let release: LatestRelease = serde_json::from_str(body).unwrap();
        assert_eq!(release.tag_name, "v1.9.0");
        assert_eq!(release.version(), "1.9.0");
    }

    #[test]
    fn test_differs_from_ignores_leading_v() {
        let current = AppVersion::new("1.8.0-beta.4");
        let same = LatestRelease {
            tag_name: "v1.8.0-beta.4".to_string(),
        };
        assert!(!same.differs_from(&current));

        let newer = LatestRelease {
            tag_name: "1.9.0".to_string(),
        };
        assert!(newer.differs_from(&current));
    }

    #[test]
    fn test_new_version_html() {
        let html = new_version_html(
            "New version available: <a href='https://example.com/releases'>",
            "v2.0.0",
        );
        assert_eq!(
            html,
            "New version available: <a href='https://example.com/releases'>v2.0.0</a>"
        );
    }
}
