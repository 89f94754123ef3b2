//! Update notifier
//!
//! Relays update lifecycle signals from the privileged process to the user:
//! version label, changelog dialog, toasts, and the restart prompt once a new
//! build has been downloaded.

use std::sync::atomic::{AtomicBool, Ordering};

use serde_json::Value;

use super::changelog::Changelog;
use super::config::UpdaterConfig;
use super::release_feed::{new_version_html, LatestRelease, ReleaseFeed};
use super::services::Services;
use super::signal::{InboundSignal, OutboundSignal, PromptResponse, UpdatePayload};
use crate::core::{AppVersion, NotifierError, Result};

pub const CURRENT_VERSION_KEY: &str = "Current version";
pub const UPDATE_AVAILABLE_KEY: &str = "New version available, downloading now";
pub const NO_UPDATES_KEY: &str = "No new updates found";
pub const CHECKING_KEY: &str = "Checking for updates";
pub const RESTART_PROMPT_KEY: &str =
    "Update downloaded. It will be installed on restart. Restart app now?";
pub const NEW_VERSION_LINK_KEY: &str =
    "New version available: <a href='https://github.com/fribbels/Fribbels-Epic-7-Optimizer/releases'>";

/// What handling one signal or click did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignalOutcome {
    /// Handlers are not registered yet
    Ignored,
    /// Handled with no observable effect
    NoAction,
    /// Diagnostic trace only
    Traced,
    /// An informational notice was shown
    Notified,
    /// The "no new updates" notice was shown
    UpToDate,
    /// A different version was reported by a check; nothing is shown
    NewerVersionReported { version: String },
    /// Worker stopped and restart requested
    RestartRequested,
    /// User postponed the restart
    RestartDeclined,
    /// A manual check was sent to the privileged process
    CheckRequested,
}

/// Update notification component
pub struct UpdateNotifier {
    config: UpdaterConfig,
    services: Services,
    changelog: Changelog,
    registered: AtomicBool,
}

impl UpdateNotifier {
    pub fn new(config: UpdaterConfig, services: Services) -> Self {
        Self {
            config,
            services,
            changelog: Changelog::current(),
            registered: AtomicBool::new(false),
        }
    }

    pub fn with_changelog(mut self, changelog: Changelog) -> Self {
        self.changelog = changelog;
        self
    }

    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    pub fn current_version(&self) -> &AppVersion {
        &self.config.current_version
    }

    /// Present the "what's new" dialog
    pub fn show_new_features(&self) {
        self.services
            .dialog
            .show_new_features(&self.changelog.to_html());
    }

    /// Whether `check_for_updates` has run
    pub fn is_registered(&self) -> bool {
        self.registered.load(Ordering::Acquire)
    }

    /// Write the version label and register the signal and click handlers.
    ///
    /// Runs once; later calls return `false` without side effects.
    pub fn check_for_updates(&self) -> bool {
        if self
            .registered
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            tracing::debug!("Update handlers already registered");
            return false;
        }

        let label = format!(
            "{}: v{}",
            self.services.localizer.t(CURRENT_VERSION_KEY),
            self.config.current_version
        );
        self.services
            .ui
            .set_text(&self.config.version_element_id, &label);

        tracing::info!(version = %self.config.current_version, "Update handlers registered");
        true
    }

    /// Dispatch one signal from the privileged process
    pub async fn handle_signal(&self, signal: InboundSignal) -> SignalOutcome {
        if !self.is_registered() {
            tracing::debug!(signal = signal.name(), "No handler registered, dropping signal");
            return SignalOutcome::Ignored;
        }

        match signal {
            InboundSignal::UpdateAvailable => {
                self.notify(UPDATE_AVAILABLE_KEY);
                SignalOutcome::Notified
            }
            InboundSignal::UpdateNotAvailable => SignalOutcome::NoAction,
            InboundSignal::Test { first, second } => {
                self.trace_payload("test", &first, &second);
                SignalOutcome::Traced
            }
            InboundSignal::Check { payload } => self.on_check_result(&payload),
            InboundSignal::UpdateDownloaded { payload } => self.on_update_downloaded(&payload).await,
        }
    }

    /// Click handler of the "check for updates" button
    pub async fn on_check_clicked(&self) -> Result<SignalOutcome> {
        if !self.is_registered() {
            return Ok(SignalOutcome::Ignored);
        }

        self.notify(CHECKING_KEY);

        if let Err(e) = self.services.dataset.refresh().await {
            tracing::error!("Error refreshing hero data: {}", e);
        }

        self.services.channel.send(OutboundSignal::Check)?;
        Ok(SignalOutcome::CheckRequested)
    }

    /// Compare against the public release feed, if enabled
    pub async fn check_release_feed(&self) -> Result<Option<LatestRelease>> {
        let feed_config = &self.config.release_feed;
        if !feed_config.enabled {
            return Ok(None);
        }

        let feed = ReleaseFeed::new(feed_config.clone(), &self.config.current_version)?;
        let release = match feed.latest().await {
            Ok(release) => release,
            Err(e) => {
                tracing::error!("Release feed lookup failed: {}", e);
                return Err(e);
            }
        };

        if release.differs_from(&self.config.current_version) {
            tracing::info!(tag = %release.tag_name, "Release feed reports a different version");
            let html = new_version_html(
                &self.services.localizer.t(NEW_VERSION_LINK_KEY),
                &release.tag_name,
            );
            self.services.dialog.html_success(&html);
        }

        Ok(Some(release))
    }

    fn on_check_result(&self, payload: &UpdatePayload) -> SignalOutcome {
        self.trace_payload("check", payload.raw(), &Value::Null);

        match payload.decode() {
            Ok(response) if self.is_current(response.version()) => {
                self.notify(NO_UPDATES_KEY);
                SignalOutcome::UpToDate
            }
            Ok(response) => {
                // No notice is defined for a newer version reported through a check.
                let version = response.version_label();
                tracing::info!(version = %version, "Check reported a different version");
                SignalOutcome::NewerVersionReported { version }
            }
            Err(e) => self.recover_decode_failure(e),
        }
    }

    async fn on_update_downloaded(&self, payload: &UpdatePayload) -> SignalOutcome {
        self.trace_payload("update_downloaded", payload.raw(), &Value::Null);

        match payload.decode() {
            Ok(response) if self.is_current(response.version()) => {
                self.notify(NO_UPDATES_KEY);
                return SignalOutcome::UpToDate;
            }
            Ok(response) => {
                tracing::info!(version = %response.version_label(), "Update downloaded");
            }
            Err(e) => {
                // The build is on disk regardless of what the payload says
                tracing::warn!("Failed to parse IPC response: {}", e);
            }
        }

        let message = self.services.localizer.t(RESTART_PROMPT_KEY);
        let response = match self.services.dialog.update_prompt(&message).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Restart prompt failed: {}", e);
                PromptResponse::Later
            }
        };

        if response != PromptResponse::Restart {
            tracing::info!("Restart postponed");
            return SignalOutcome::RestartDeclined;
        }

        if let Err(e) = self.services.worker.kill().await {
            tracing::error!("Failed to stop worker process: {}", e);
        }
        if let Err(e) = self.services.channel.send(OutboundSignal::RestartApp) {
            tracing::error!("Failed to request restart: {}", e);
        }
        SignalOutcome::RestartRequested
    }

    fn recover_decode_failure(&self, error: NotifierError) -> SignalOutcome {
        tracing::warn!("Failed to parse IPC response: {}", error);
        self.notify(NO_UPDATES_KEY);
        SignalOutcome::UpToDate
    }

    fn is_current(&self, reported: Option<&str>) -> bool {
        reported.is_some_and(|version| self.config.current_version.matches(version))
    }

    fn notify(&self, key: &str) {
        self.services.notifier.info(&self.services.localizer.t(key));
    }

    fn trace_payload(&self, signal: &str, first: &Value, second: &Value) {
        if self.config.debug {
            tracing::info!(signal, %first, %second, "Update signal received");
        } else {
            tracing::debug!(signal, %first, %second, "Update signal received");
        }
    }
}
