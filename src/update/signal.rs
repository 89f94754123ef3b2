//! Update lifecycle signals
//!
//! Inbound signals arrive from the privileged process that owns the update
//! download and install. Outbound signals are requests sent back to it.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{NotifierError, Result};

pub const UPDATE_AVAILABLE: &str = "update_available";
pub const UPDATE_NOT_AVAILABLE: &str = "update-not-available";
pub const UPDATE_DOWNLOADED: &str = "update_downloaded";
pub const CHECK: &str = "check";
pub const TEST: &str = "test";
pub const RESTART_APP: &str = "restart_app";

/// Signal received from the privileged process
#[derive(Debug, Clone, PartialEq)]
pub enum InboundSignal {
    /// A newer build was found and is being downloaded
    UpdateAvailable,
    /// The updater found nothing to install
    UpdateNotAvailable,
    /// A build finished downloading and installs on restart
    UpdateDownloaded { payload: UpdatePayload },
    /// Result of a check requested by this process
    Check { payload: UpdatePayload },
    /// Diagnostic ping, traced verbatim
    Test { first: Value, second: Value },
}

impl InboundSignal {
    /// Wire name of the signal
    pub fn name(&self) -> &'static str {
        match self {
            InboundSignal::UpdateAvailable => UPDATE_AVAILABLE,
            InboundSignal::UpdateNotAvailable => UPDATE_NOT_AVAILABLE,
            InboundSignal::UpdateDownloaded { .. } => UPDATE_DOWNLOADED,
            InboundSignal::Check { .. } => CHECK,
            InboundSignal::Test { .. } => TEST,
        }
    }

    /// Build a signal from its wire name and positional arguments
    pub fn from_parts(channel: &str, args: Vec<Value>) -> Result<Self> {
        let mut args = args.into_iter();
        let mut next = move || args.next().unwrap_or(Value::Null);

        let signal = match channel {
            UPDATE_AVAILABLE => InboundSignal::UpdateAvailable,
            UPDATE_NOT_AVAILABLE => InboundSignal::UpdateNotAvailable,
            UPDATE_DOWNLOADED => InboundSignal::UpdateDownloaded {
                payload: UpdatePayload::new(next()),
            },
            CHECK => InboundSignal::Check {
                payload: UpdatePayload::new(next()),
            },
            TEST => {
                let first = next();
                let second = next();
                InboundSignal::Test { first, second }
            }
            other => {
                return Err(NotifierError::UnknownSignal {
                    channel: other.to_string(),
                })
            }
        };
        Ok(signal)
    }
}

/// Request sent to the privileged process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OutboundSignal {
    /// Ask the updater to look for a new build
    #[serde(rename = "check")]
    Check,
    /// Quit and install the downloaded build
    #[serde(rename = "restart_app")]
    RestartApp,
}

impl OutboundSignal {
    pub fn name(&self) -> &'static str {
        match self {
            OutboundSignal::Check => CHECK,
            OutboundSignal::RestartApp => RESTART_APP,
        }
    }
}

/// Version details reported by the updater
///
/// The version is kept loose: a missing or non-string value is still a valid
/// report, it just never equals the running version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<Value>,
}

/// Decoded payload of `check` and `update_downloaded`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCheckResponse {
    #[serde(rename = "updateInfo")]
    pub update_info: UpdateInfo,
}

impl UpdateCheckResponse {
    /// Reported version, when it is a string
    pub fn version(&self) -> Option<&str> {
        self.update_info.version.as_ref().and_then(Value::as_str)
    }

    /// Reported version as text for logs and outcomes
    pub fn version_label(&self) -> String {
        match &self.update_info.version {
            Some(Value::String(version)) => version.clone(),
            Some(other) => other.to_string(),
            None => String::new(),
        }
    }
}

/// Raw payload as it came off the channel
///
/// The updater sends either a JSON-encoded string or an already structured
/// object.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdatePayload(Value);

impl UpdatePayload {
    pub fn new(raw: Value) -> Self {
        Self(raw)
    }

    pub fn raw(&self) -> &Value {
        &self.0
    }

    /// Normalize both payload shapes into one response
    pub fn decode(&self) -> Result<UpdateCheckResponse> {
        let document = match &self.0 {
            Value::String(text) => {
                serde_json::from_str::<Value>(text).map_err(NotifierError::decode)?
            }
            other => other.clone(),
        };
        serde_json::from_value(document).map_err(NotifierError::decode)
    }
}

impl From<Value> for UpdatePayload {
    fn from(raw: Value) -> Self {
        Self::new(raw)
    }
}

/// Answer to the restart prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptResponse {
    Restart,
    Later,
}

impl PromptResponse {
    /// Map the dialog library's button value; only `"restart"` confirms
    pub fn from_button(value: &str) -> Self {
        if value == "restart" {
            PromptResponse::Restart
        } else {
            PromptResponse::Later
        }
    }
}
