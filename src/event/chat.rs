//! Events that carry a chat body: PRIVMSG, WHISPER and USERNOTICE.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::Envelope;
use crate::fields::{Emote, MsgParam, User};

/// A chat message sent to a channel.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PrivateMessage {
    pub envelope: Envelope,
    pub user: User,
    pub channel: String,
    pub room_id: String,
    /// Unique message id (`id` tag).
    pub id: String,
    /// When the server relayed the message (`tmi-sent-ts`).
    pub time: DateTime<Utc>,
    /// Body with any `/me` markers removed.
    pub text: String,
    /// Whether the body was sent as a `/me` action.
    pub is_action: bool,
    pub emotes: Vec<Emote>,
    /// Bits cheered with this message, zero when none.
    pub bits: u64,
}

/// A private message between two users.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WhisperMessage {
    pub envelope: Envelope,
    pub user: User,
    /// Login of the recipient.
    pub target: String,
    pub message_id: String,
    pub thread_id: String,
    pub text: String,
    pub is_action: bool,
    pub emotes: Vec<Emote>,
}

/// A channel event announced in chat: subs, resubs, gifts, raids and the
/// like. [`UserNoticeMessage::msg_id`] names the event.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserNoticeMessage {
    pub envelope: Envelope,
    pub user: User,
    pub channel: String,
    pub room_id: String,
    pub id: String,
    pub time: DateTime<Utc>,
    /// Optional message the user attached, empty when none.
    pub text: String,
    pub is_action: bool,
    pub emotes: Vec<Emote>,
    /// Event subtype, e.g. `sub`, `resub`, `subgift` or `raid`.
    pub msg_id: String,
    /// Every `msg-param-*` tag, typed.
    pub msg_params: HashMap<String, MsgParam>,
    /// Server-rendered description of the event.
    pub system_msg: String,
}

impl UserNoticeMessage {
    pub fn msg_param(&self, key: &str) -> Option<&MsgParam> {
        self.msg_params.get(key)
    }
}
