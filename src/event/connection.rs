//! Connection-level events and the fallback for unknown commands.

use super::Envelope;

/// The server asks the client to reconnect.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReconnectMessage {
    pub envelope: Envelope,
}

/// Keep-alive probe; echo [`PingMessage::message`] back in a PONG.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PingMessage {
    pub envelope: Envelope,
    pub message: String,
}

/// Answer to a PING we sent.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PongMessage {
    pub envelope: Envelope,
    pub message: String,
}

/// A line whose command has no dedicated decoder.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawMessage {
    pub envelope: Envelope,
    /// Best-effort body: the parameters from the first one without a `#`.
    pub text: String,
}
