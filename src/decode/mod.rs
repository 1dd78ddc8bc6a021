//! Line-to-event decoding.
//!
//! [`decode`] frames a line, decodes its tags and hands both to the decoder
//! the [`DispatchTable`] registers for the command. Commands without an
//! entry fall back to [`RawMessage`](crate::RawMessage).

mod channel;
mod connection;
mod messaging;

use std::collections::HashMap;
use std::sync::OnceLock;

use tracing::trace;

use crate::event::{Envelope, Event};
use crate::kind::MessageKind;
use crate::message::{FramedLine, Tags};

/// Signature shared by all type-specific decoders.
pub type DecodeFn = fn(Envelope, &FramedLine<'_>) -> Event;

/// What the dispatch table stores for one command.
#[derive(Clone, Copy)]
pub struct DispatchEntry {
    pub kind: MessageKind,
    pub decode: DecodeFn,
}

impl std::fmt::Debug for DispatchEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DispatchEntry")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Immutable mapping from command token to kind and decoder.
///
/// Most callers use the shared instance behind [`table`]. The table is
/// never mutated after construction, so one instance can serve any number
/// of threads.
#[derive(Debug)]
pub struct DispatchTable {
    entries: HashMap<&'static str, DispatchEntry>,
}

impl DispatchTable {
    pub fn new() -> DispatchTable {
        let entries: [(&'static str, MessageKind, DecodeFn); 13] = [
            ("WHISPER", MessageKind::Whisper, messaging::whisper),
            ("PRIVMSG", MessageKind::PrivateMessage, messaging::privmsg),
            ("CLEARCHAT", MessageKind::ClearChat, channel::clearchat),
            ("ROOMSTATE", MessageKind::RoomState, channel::roomstate),
            ("USERNOTICE", MessageKind::UserNotice, messaging::usernotice),
            ("USERSTATE", MessageKind::UserState, channel::userstate),
            ("NOTICE", MessageKind::Notice, channel::notice),
            ("JOIN", MessageKind::Join, channel::join),
            ("PART", MessageKind::Part, channel::part),
            ("RECONNECT", MessageKind::Reconnect, connection::reconnect),
            ("353", MessageKind::Names, channel::names),
            ("PING", MessageKind::Ping, connection::ping),
            ("PONG", MessageKind::Pong, connection::pong),
        ];

        DispatchTable {
            entries: entries
                .into_iter()
                .map(|(command, kind, decode)| (command, DispatchEntry { kind, decode }))
                .collect(),
        }
    }

    /// Exact, case-sensitive lookup of a command token.
    pub fn lookup(&self, command: &str) -> Option<&DispatchEntry> {
        self.entries.get(command)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decode one line using this table.
    pub fn decode(&self, line: &str) -> Event {
        let framed = FramedLine::parse(line);
        let envelope = Envelope {
            raw: line.to_owned(),
            command: framed.command.to_owned(),
            tags: framed.tags.map(Tags::parse).unwrap_or_default(),
        };

        match self.lookup(framed.command) {
            Some(entry) => (entry.decode)(envelope, &framed),
            None => {
                trace!(command = framed.command, "no decoder for command, keeping raw line");
                connection::raw(envelope, &framed)
            }
        }
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        DispatchTable::new()
    }
}

/// The process-wide dispatch table, built on first use.
pub fn table() -> &'static DispatchTable {
    static TABLE: OnceLock<DispatchTable> = OnceLock::new();
    TABLE.get_or_init(DispatchTable::new)
}

/// Decode one protocol line into an [`Event`].
///
/// Never fails and never panics: malformed lines decode with empty or zero
/// fields, and unknown commands decode to [`Event::Unset`].
///
/// ```
/// use tmi_proto::{decode, Event, MessageKind};
///
/// let event = decode("@slow=10 :tmi.twitch.tv ROOMSTATE #gempir");
/// assert_eq!(event.kind(), MessageKind::RoomState);
///
/// let Event::RoomState(room) = event else { unreachable!() };
/// assert_eq!(room.channel, "gempir");
/// assert_eq!(room.state.get("slow"), Some(&10));
/// ```
pub fn decode(line: &str) -> Event {
    table().decode(line)
}

/// Body of a chat line with any `/me` framing removed.
///
/// Returns the body and whether it was an action.
pub(crate) fn strip_action(body: &str) -> (&str, bool) {
    match body
        .strip_prefix("\u{1}ACTION")
        .and_then(|rest| rest.strip_suffix('\u{1}'))
    {
        Some(inner) => (inner.strip_prefix(' ').unwrap_or(inner), true),
        None => (body, false),
    }
}
