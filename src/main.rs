//! Update notifier console host
//!
//! Reads updater signals as JSON lines from stdin, writes outbound requests
//! as JSON lines to stdout, and renders notices and dialogs on stderr.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use update_notifier::config::{ConfigStore, ConfigStoreConfig};
use update_notifier::core::RecoveryAction;
use update_notifier::console::{ConsoleDialog, ConsoleNotifier, ConsoleUi};
use update_notifier::i18n::Catalog;
use update_notifier::ipc::{
    decode_line, encode_outbound, run_listener, HostMessage, SignalBridge, DEFAULT_CAPACITY,
};
use update_notifier::logging::{init_basic_logging, LoggingSystem};
use update_notifier::update::{
    ChildWorker, DatasetRefresher, NoDataset, NoWorker, Services, UpdateNotifier, WorkerProcess,
};

#[derive(Debug, Parser)]
#[command(name = "update-notifier", version, about = "Update notifications for the optimizer app")]
struct Cli {
    /// Configuration file (created with defaults when missing)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Button value given to the restart prompt
    #[arg(long, default_value = "restart")]
    prompt_answer: String,

    /// Show the "what's new" dialog on startup
    #[arg(long)]
    show_new_features: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let store_settings = match &cli.config {
        Some(path) => ConfigStoreConfig::at(path),
        None => ConfigStoreConfig::default(),
    };
    let store = ConfigStore::new(store_settings)
        .await
        .context("failed to load configuration")?;
    let config = store.get().await;

    // Keep the guard alive so buffered file logs are flushed on exit
    let _logging_system = match LoggingSystem::init(config.logging.clone()) {
        Ok(system) => Some(system),
        Err(e) => {
            eprintln!("Failed to initialize logging system: {}. Using basic logging.", e);
            init_basic_logging(config.logging.level);
            None
        }
    };

    tracing::info!(
        version = %config.updater.current_version,
        config = ?store.config_path(),
        "Starting update notifier"
    );

    let localizer = match &config.language_file {
        Some(path) => match Catalog::load(path).await {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!("Falling back to untranslated strings: {}", e);
                Catalog::identity()
            }
        },
        None => Catalog::identity(),
    };

    let worker: Arc<dyn WorkerProcess> = match &config.worker {
        Some(worker_config) => Arc::new(ChildWorker::spawn(worker_config)?),
        None => Arc::new(NoWorker),
    };
    let dataset: Arc<dyn DatasetRefresher> = Arc::new(NoDataset);

    let (bridge, ends) = SignalBridge::new(DEFAULT_CAPACITY);
    let services = Services {
        channel: Arc::new(bridge),
        dialog: Arc::new(ConsoleDialog::new(cli.prompt_answer.clone())),
        notifier: Arc::new(ConsoleNotifier),
        localizer: Arc::new(localizer),
        ui: Arc::new(ConsoleUi::default()),
        worker,
        dataset,
    };

    let check_button_id = config.updater.check_button_id.clone();
    let notifier = Arc::new(UpdateNotifier::new(config.updater, services));

    if cli.show_new_features {
        notifier.show_new_features();
    }
    notifier.check_for_updates();

    if let Err(e) = notifier.check_release_feed().await {
        tracing::warn!("Release feed check skipped: {}", e);
    }

    let listener = tokio::spawn(run_listener(notifier.clone(), ends.inbound_rx));

    let mut outbound_rx = ends.outbound_rx;
    let forwarder = tokio::spawn(async move {
        let mut stdout = tokio::io::stdout();
        while let Some(signal) = outbound_rx.recv().await {
            let line = encode_outbound(signal)?;
            stdout.write_all(line.as_bytes()).await?;
            stdout.write_all(b"\n").await?;
            stdout.flush().await?;
        }
        Ok::<_, update_notifier::NotifierError>(())
    });

    let inbound_tx = ends.inbound_tx;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match decode_line(&line) {
            Ok(Some(HostMessage::Signal(signal))) => {
                if inbound_tx.send(signal).await.is_err() {
                    tracing::error!("Signal listener stopped");
                    break;
                }
            }
            Ok(Some(HostMessage::Click(element))) if element == check_button_id => {
                if let Err(e) = notifier.on_check_clicked().await {
                    tracing::error!("Manual update check failed: {}", e);
                    if e.recovery_action() == RecoveryAction::Propagate {
                        break;
                    }
                }
            }
            Ok(Some(HostMessage::Click(element))) => {
                tracing::debug!(element = %element, "Click on element without handler");
            }
            Ok(None) => {}
            Err(e) => tracing::warn!("Skipping malformed line: {}", e),
        }
    }

    drop(inbound_tx);
    let handled = listener.await.context("signal listener panicked")?;
    tracing::info!(handled, "Input closed, shutting down");

    // Dropping the notifier releases the outbound sender and ends the forwarder
    drop(notifier);
    forwarder
        .await
        .context("signal forwarder panicked")?
        .context("failed to write outbound signal")?;

    Ok(())
}
