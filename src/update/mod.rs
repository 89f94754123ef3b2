//! Update notification module
//!
//! This module provides:
//! - Typed update lifecycle signals and payload decoding
//! - Capability traits for dialogs, toasts, localization and the UI
//! - The `UpdateNotifier` component wiring signals to the user
//! - An optional latest-release lookup
//! - The background worker handle stopped before restart

pub mod changelog;
pub mod config;
pub mod notifier;
pub mod release_feed;
pub mod services;
pub mod signal;
pub mod worker;


pub use changelog::Changelog;
pub use config::{ReleaseFeedConfig, UpdaterConfig};
pub use notifier::{SignalOutcome, UpdateNotifier};
pub use release_feed::{LatestRelease, ReleaseFeed};
pub use services::{
    DatasetRefresher, DialogService, Localizer, NoDataset, NoWorker, NotificationService,
    Services, UiSurface, UpdateChannel, WorkerProcess,
};
pub use signal::{
    InboundSignal, OutboundSignal, PromptResponse, UpdateCheckResponse, UpdateInfo, UpdatePayload,
};
pub use worker::{ChildWorker, WorkerConfig};
