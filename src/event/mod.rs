//! Typed events produced by the decoder.
//!
//! Every event embeds an [`Envelope`] with the untouched line, its command
//! token and its decoded tags. [`Event`] is the closed union over all kinds.

mod channel;
mod chat;
mod connection;

use std::convert::Infallible;
use std::str::FromStr;

use crate::fields::User;
use crate::kind::MessageKind;
use crate::message::Tags;

pub use self::channel::{
    ClearChatMessage, NamesMessage, NoticeMessage, RoomStateMessage, UserJoinMessage,
    UserPartMessage, UserStateMessage,
};
pub use self::chat::{PrivateMessage, UserNoticeMessage, WhisperMessage};
pub use self::connection::{PingMessage, PongMessage, RawMessage, ReconnectMessage};

/// Fields shared by every event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Envelope {
    /// The line exactly as it was handed to the decoder.
    pub raw: String,
    /// The command token, e.g. `PRIVMSG` or `353`.
    pub command: String,
    /// Decoded tag block.
    pub tags: Tags,
}

/// One decoded protocol line.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum Event {
    Unset(RawMessage),
    Whisper(WhisperMessage),
    PrivateMessage(PrivateMessage),
    ClearChat(ClearChatMessage),
    RoomState(RoomStateMessage),
    UserNotice(UserNoticeMessage),
    UserState(UserStateMessage),
    Notice(NoticeMessage),
    Join(UserJoinMessage),
    Part(UserPartMessage),
    Reconnect(ReconnectMessage),
    Names(NamesMessage),
    Ping(PingMessage),
    Pong(PongMessage),
}

impl Event {
    pub fn kind(&self) -> MessageKind {
        match self {
            Event::Unset(_) => MessageKind::Unset,
            Event::Whisper(_) => MessageKind::Whisper,
            Event::PrivateMessage(_) => MessageKind::PrivateMessage,
            Event::ClearChat(_) => MessageKind::ClearChat,
            Event::RoomState(_) => MessageKind::RoomState,
            Event::UserNotice(_) => MessageKind::UserNotice,
            Event::UserState(_) => MessageKind::UserState,
            Event::Notice(_) => MessageKind::Notice,
            Event::Join(_) => MessageKind::Join,
            Event::Part(_) => MessageKind::Part,
            Event::Reconnect(_) => MessageKind::Reconnect,
            Event::Names(_) => MessageKind::Names,
            Event::Ping(_) => MessageKind::Ping,
            Event::Pong(_) => MessageKind::Pong,
        }
    }

    pub fn envelope(&self) -> &Envelope {
        match self {
            Event::Unset(m) => &m.envelope,
            Event::Whisper(m) => &m.envelope,
            Event::PrivateMessage(m) => &m.envelope,
            Event::ClearChat(m) => &m.envelope,
            Event::RoomState(m) => &m.envelope,
            Event::UserNotice(m) => &m.envelope,
            Event::UserState(m) => &m.envelope,
            Event::Notice(m) => &m.envelope,
            Event::Join(m) => &m.envelope,
            Event::Part(m) => &m.envelope,
            Event::Reconnect(m) => &m.envelope,
            Event::Names(m) => &m.envelope,
            Event::Ping(m) => &m.envelope,
            Event::Pong(m) => &m.envelope,
        }
    }

    /// The untouched input line.
    pub fn raw(&self) -> &str {
        &self.envelope().raw
    }

    /// The command token of the input line.
    pub fn raw_command(&self) -> &str {
        &self.envelope().command
    }

    pub fn tags(&self) -> &Tags {
        &self.envelope().tags
    }

    /// Channel the event is scoped to, for channel-scoped kinds.
    pub fn channel(&self) -> Option<&str> {
        let channel = match self {
            Event::PrivateMessage(m) => &m.channel,
            Event::ClearChat(m) => &m.channel,
            Event::RoomState(m) => &m.channel,
            Event::UserNotice(m) => &m.channel,
            Event::UserState(m) => &m.channel,
            Event::Notice(m) => &m.channel,
            Event::Join(m) => &m.channel,
            Event::Part(m) => &m.channel,
            Event::Names(m) => &m.channel,
            _ => return None,
        };
        Some(channel.as_str())
    }

    /// Sender identity, for user-attributed kinds.
    pub fn user(&self) -> Option<&User> {
        match self {
            Event::Whisper(m) => Some(&m.user),
            Event::PrivateMessage(m) => Some(&m.user),
            Event::UserNotice(m) => Some(&m.user),
            Event::UserState(m) => Some(&m.user),
            _ => None,
        }
    }

    /// Message body, for kinds that carry one.
    pub fn text(&self) -> Option<&str> {
        let text = match self {
            Event::Unset(m) => &m.text,
            Event::Whisper(m) => &m.text,
            Event::PrivateMessage(m) => &m.text,
            Event::UserNotice(m) => &m.text,
            Event::Notice(m) => &m.text,
            _ => return None,
        };
        Some(text.as_str())
    }
}

impl FromStr for Event {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Event, Self::Err> {
        Ok(crate::decode::decode(s))
    }
}
