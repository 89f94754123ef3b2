//! Signal transport between the notifier and the privileged process

mod bridge;
mod codec;


pub use bridge::{run_listener, BridgeEnds, SignalBridge, DEFAULT_CAPACITY};
pub use codec::{decode_line, encode_outbound, Envelope, HostMessage, UI_CLICK};
