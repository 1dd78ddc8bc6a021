//! # tmi-proto
//!
//! A Rust library for decoding the Twitch Messaging Interface (TMI) flavour
//! of IRC into strongly-typed chat events.
//!
//! ## Features
//!
//! - Tag block decoding with IRCv3 value unescaping
//! - Line framing into source, command and parameters
//! - One typed event per supported command (PRIVMSG, WHISPER, USERNOTICE,
//!   CLEARCHAT, ROOMSTATE, USERSTATE, NOTICE, JOIN, PART, RECONNECT, 353,
//!   PING, PONG), with a raw fallback for everything else
//! - Badges, emote spans, timestamps and `msg-param-*` bags decoded into
//!   typed fields
//! - Optional Tokio codec for reading events straight off a byte stream
//!
//! Decoding never fails. A malformed line yields an event with empty or zero
//! fields, and an unknown command yields [`Event::Unset`].

#![deny(clippy::all)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use tmi_proto::{decode, Event, MessageKind};
//!
//! let raw = "@badges=subscriber/6,premium/1;color=#FF0000;display-name=Redflamingo13;\
//!            emotes=;id=2a31a9df-d6ff-4840-b211-a2547c7e656e;mod=0;room-id=11148817;\
//!            subscriber=1;tmi-sent-ts=1490382457309;turbo=0;user-id=78424343;user-type= \
//!            :redflamingo13!redflamingo13@redflamingo13.tmi.twitch.tv PRIVMSG #pajlada \
//!            :Thrashh5, FeelsWayTooAmazingMan kinda";
//!
//! let event = decode(raw);
//! assert_eq!(event.kind(), MessageKind::PrivateMessage);
//!
//! if let Event::PrivateMessage(msg) = event {
//!     assert_eq!(msg.channel, "pajlada");
//!     assert_eq!(msg.user.name, "redflamingo13");
//!     assert_eq!(msg.user.badges["subscriber"], 6);
//!     assert_eq!(msg.text, "Thrashh5, FeelsWayTooAmazingMan kinda");
//! }
//! ```
//!
//! ### Reading from a stream
//!
//! With the default `tokio` feature, [`codec::event_stream`] wraps any
//! `AsyncRead` into a stream of events:
//!
//! ```rust,ignore
//! use futures_util::StreamExt;
//!
//! let mut events = tmi_proto::codec::event_stream(tcp_stream);
//! while let Some(event) = events.next().await {
//!     let event = event?;
//!     println!("{}: {}", event.kind(), event.raw());
//! }
//! ```

#[cfg(feature = "tokio")]
#[cfg_attr(docsrs, doc(cfg(feature = "tokio")))]
pub mod codec;
pub mod decode;
pub mod error;
pub mod event;
pub mod fields;
pub mod kind;
pub mod message;

#[cfg(feature = "tokio")]
pub use self::codec::{event_stream, EventCodec, MAX_LINE_LEN};
pub use self::decode::{decode, table, DispatchTable};
pub use self::error::ProtocolError;
pub use self::event::{
    ClearChatMessage, Envelope, Event, NamesMessage, NoticeMessage, PingMessage, PongMessage,
    PrivateMessage, RawMessage, ReconnectMessage, RoomStateMessage, UserJoinMessage,
    UserNoticeMessage, UserPartMessage, UserStateMessage, WhisperMessage,
};
pub use self::fields::{Emote, MsgParam, User};
pub use self::kind::MessageKind;
pub use self::message::tags::escape_tag_value;
pub use self::message::{FramedLine, Tags};
