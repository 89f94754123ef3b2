//! In-process signal bridge
//!
//! Connects the notifier to whatever transport the host uses. Inbound
//! signals are queued on one mpsc channel and handled in arrival order;
//! outbound requests are queued on another for the host to forward.

use std::sync::Arc;

use tokio::sync::mpsc::{self, error::TrySendError, Receiver, Sender};

use crate::core::{NotifierError, Result};
use crate::update::{InboundSignal, OutboundSignal, SignalOutcome, UpdateChannel, UpdateNotifier};

/// Default queue depth in each direction
pub const DEFAULT_CAPACITY: usize = 64;

/// Outbound side handed to the notifier as its `UpdateChannel`
#[derive(Clone)]
pub struct SignalBridge {
    outbound: Sender<OutboundSignal>,
}

/// Host side of the bridge
pub struct BridgeEnds {
    /// Feed signals from the privileged process in here
    pub inbound_tx: Sender<InboundSignal>,
    /// Consumed by `run_listener`
    pub inbound_rx: Receiver<InboundSignal>,
    /// Requests to forward to the privileged process
    pub outbound_rx: Receiver<OutboundSignal>,
}

impl SignalBridge {
    pub fn new(capacity: usize) -> (Self, BridgeEnds) {
        let (inbound_tx, inbound_rx) = mpsc::channel(capacity);
        let (outbound_tx, outbound_rx) = mpsc::channel(capacity);
        (
            Self {
                outbound: outbound_tx,
            },
            BridgeEnds {
                inbound_tx,
                inbound_rx,
                outbound_rx,
            },
        )
    }
}

impl UpdateChannel for SignalBridge {
    fn send(&self, signal: OutboundSignal) -> Result<()> {
        match self.outbound.try_send(signal) {
            Ok(()) => {
                tracing::debug!(signal = signal.name(), "Outbound signal queued");
                Ok(())
            }
            Err(TrySendError::Closed(_)) => Err(NotifierError::ChannelClosed),
            Err(TrySendError::Full(_)) => Err(NotifierError::ChannelFull {
                signal: signal.name().to_string(),
            }),
        }
    }
}

/// Handle inbound signals one at a time until every sender is dropped.
///
/// Returns how many signals were handled.
pub async fn run_listener(
    notifier: Arc<UpdateNotifier>,
    mut inbound_rx: Receiver<InboundSignal>,
) -> usize {
    let mut handled = 0;
    while let Some(signal) = inbound_rx.recv().await {
        let name = signal.name();
        let outcome = notifier.handle_signal(signal).await;
        if outcome != SignalOutcome::Ignored {
            handled += 1;
        }
        tracing::debug!(signal = name, ?outcome, "Signal handled");
    }
    tracing::info!(handled, "Signal listener stopped");
    handled
}
