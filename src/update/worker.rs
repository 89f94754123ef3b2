//! Background worker process handle
//!
//! The optimizer runs as a child process. It has to be stopped before the
//! application restarts into the freshly installed build.

use std::path::PathBuf;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::process::{Child, Command};
use tokio::sync::Mutex;

use super::services::WorkerProcess;
use crate::core::{NotifierError, Result};

/// Command line of the background worker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerConfig {
    pub executable: PathBuf,
    #[serde(default)]
    pub args: Vec<String>,
}

/// Owned child process that can be killed once
pub struct ChildWorker {
    child: Mutex<Option<Child>>,
}

impl ChildWorker {
    /// Start the worker process
    pub fn spawn(config: &WorkerConfig) -> Result<Self> {
        tracing::info!(executable = ?config.executable, "Starting worker process");

        let child = Command::new(&config.executable)
            .args(&config.args)
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| NotifierError::Worker {
                reason: format!("failed to start {:?}: {}", config.executable, e),
            })?;

        Ok(Self::from_child(child))
    }

    pub fn from_child(child: Child) -> Self {
        Self {
            child: Mutex::new(Some(child)),
        }
    }

    /// Whether a child is still owned by this handle
    pub async fn is_attached(&self) -> bool {
        self.child.lock().await.is_some()
    }
}

#[async_trait]
impl WorkerProcess for ChildWorker {
    async fn kill(&self) -> Result<()> {
        let Some(mut child) = self.child.lock().await.take() else {
            tracing::debug!("Worker process already stopped");
            return Ok(());
        };

        tracing::info!(pid = ?child.id(), "Killing worker process");
        match child.kill().await {
            Ok(()) => Ok(()),
            // Exited on its own before the kill landed
            Err(e) if e.kind() == std::io::ErrorKind::InvalidInput => Ok(()),
            Err(e) => Err(NotifierError::Worker {
                reason: e.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_spawn_missing_executable_fails() {
        let config = WorkerConfig {
            executable: PathBuf::from("/definitely/not/a/real/worker-binary"),
            args: vec![],
        };
        let err = ChildWorker::spawn(&config).err().expect("spawn should fail");
        assert!(matches!(err, NotifierError::Worker { .. }));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_kill_detaches_child() {
        let child = Command::new("sleep").arg("30").spawn().unwrap();
        let worker = ChildWorker::from_child(child);
        assert!(worker.is_attached().await);

        worker.kill().await.unwrap();
        assert!(!worker.is_attached().await);

        // Second kill is a no-op
        worker.kill().await.unwrap();
    }
}
