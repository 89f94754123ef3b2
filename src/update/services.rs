//! Capability interfaces the notifier talks to
//!
//! The notifier never reaches for ambient singletons. The host hands it one
//! implementation of each trait, and tests hand it fakes.

use std::sync::Arc;

use async_trait::async_trait;

use super::signal::{OutboundSignal, PromptResponse};
use crate::core::Result;

/// Outbound half of the channel to the privileged process
pub trait UpdateChannel: Send + Sync {
    fn send(&self, signal: OutboundSignal) -> Result<()>;
}

/// Modal dialogs
#[async_trait]
pub trait DialogService: Send + Sync {
    /// Present the changelog modal
    fn show_new_features(&self, html: &str);

    /// Present a success modal with HTML content that requires an explicit dismiss
    fn html_success(&self, html: &str);

    /// Block on the restart confirmation
    async fn update_prompt(&self, message: &str) -> Result<PromptResponse>;
}

/// Transient toast notifications
pub trait NotificationService: Send + Sync {
    fn info(&self, message: &str);
}

/// String lookup for the active language
pub trait Localizer: Send + Sync {
    fn t(&self, key: &str) -> String;
}

/// Writable text elements of the UI
pub trait UiSurface: Send + Sync {
    fn set_text(&self, element_id: &str, text: &str);
}

/// Background optimizer worker that must stop before a restart
#[async_trait]
pub trait WorkerProcess: Send + Sync {
    async fn kill(&self) -> Result<()>;
}

/// Auxiliary hero dataset reloaded on manual checks
#[async_trait]
pub trait DatasetRefresher: Send + Sync {
    async fn refresh(&self) -> Result<()>;
}

/// Everything the notifier needs from its host
#[derive(Clone)]
pub struct Services {
    pub channel: Arc<dyn UpdateChannel>,
    pub dialog: Arc<dyn DialogService>,
    pub notifier: Arc<dyn NotificationService>,
    pub localizer: Arc<dyn Localizer>,
    pub ui: Arc<dyn UiSurface>,
    pub worker: Arc<dyn WorkerProcess>,
    pub dataset: Arc<dyn DatasetRefresher>,
}

/// Worker handle for hosts that run no background process
#[derive(Debug, Default, Clone, Copy)]
pub struct NoWorker;

#[async_trait]
impl WorkerProcess for NoWorker {
    async fn kill(&self) -> Result<()> {
        Ok(())
    }
}

/// Dataset handle for hosts without hero data
#[derive(Debug, Default, Clone, Copy)]
pub struct NoDataset;

#[async_trait]
impl DatasetRefresher for NoDataset {
    async fn refresh(&self) -> Result<()> {
        Ok(())
    }
}
