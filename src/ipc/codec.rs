//! JSON-lines wire format
//!
//! One message per line: `{"channel": "<name>", "args": [...]}`. Used by the
//! console host to talk to a privileged process over a pipe.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::Result;
use crate::update::{InboundSignal, OutboundSignal};

/// Pseudo channel for UI clicks fed in by the host
pub const UI_CLICK: &str = "ui:click";

/// One line on the wire
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub channel: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

/// Decoded host input
#[derive(Debug, Clone, PartialEq)]
pub enum HostMessage {
    Signal(InboundSignal),
    /// Click on the element with this id
    Click(String),
}

/// Parse one line; `Ok(None)` for blank lines
pub fn decode_line(line: &str) -> Result<Option<HostMessage>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let envelope: Envelope = serde_json::from_str(line)?;
    if envelope.channel == UI_CLICK {
        let element = envelope
            .args
            .first()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        return Ok(Some(HostMessage::Click(element)));
    }

    let signal = InboundSignal::from_parts(&envelope.channel, envelope.args)?;
    Ok(Some(HostMessage::Signal(signal)))
}

/// Serialize an outbound request as one line, without the trailing newline
pub fn encode_outbound(signal: OutboundSignal) -> Result<String> {
    let envelope = Envelope {
        channel: signal.name().to_string(),
        args: Vec::new(),
    };
    Ok(serde_json::to_string(&envelope)?)
}
