//! The closed set of message kinds the decoder distinguishes.

use std::fmt;

/// Kind of a decoded line, keyed by its command token.
///
/// [`MessageKind::Unset`] covers every command the decoder does not know;
/// such lines still decode, into [`crate::RawMessage`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MessageKind {
    Unset,
    Whisper,
    PrivateMessage,
    ClearChat,
    RoomState,
    UserNotice,
    UserState,
    Notice,
    Join,
    Part,
    Reconnect,
    Names,
    Ping,
    Pong,
}

impl MessageKind {
    /// Every kind with a dedicated decoder, in dispatch table order.
    pub const DECODED: [MessageKind; 13] = [
        MessageKind::Whisper,
        MessageKind::PrivateMessage,
        MessageKind::ClearChat,
        MessageKind::RoomState,
        MessageKind::UserNotice,
        MessageKind::UserState,
        MessageKind::Notice,
        MessageKind::Join,
        MessageKind::Part,
        MessageKind::Reconnect,
        MessageKind::Names,
        MessageKind::Ping,
        MessageKind::Pong,
    ];

    /// Wire command token for this kind; `None` for [`MessageKind::Unset`].
    pub fn command(self) -> Option<&'static str> {
        let cmd = match self {
            MessageKind::Unset => return None,
            MessageKind::Whisper => "WHISPER",
            MessageKind::PrivateMessage => "PRIVMSG",
            MessageKind::ClearChat => "CLEARCHAT",
            MessageKind::RoomState => "ROOMSTATE",
            MessageKind::UserNotice => "USERNOTICE",
            MessageKind::UserState => "USERSTATE",
            MessageKind::Notice => "NOTICE",
            MessageKind::Join => "JOIN",
            MessageKind::Part => "PART",
            MessageKind::Reconnect => "RECONNECT",
            MessageKind::Names => "353",
            MessageKind::Ping => "PING",
            MessageKind::Pong => "PONG",
        };
        Some(cmd)
    }

    /// Kind the dispatch table assigns to a command token.
    ///
    /// Lookup is exact and case-sensitive.
    ///
    /// ```
    /// use tmi_proto::MessageKind;
    ///
    /// assert_eq!(MessageKind::from_command("353"), MessageKind::Names);
    /// assert_eq!(MessageKind::from_command("privmsg"), MessageKind::Unset);
    /// ```
    pub fn from_command(command: &str) -> MessageKind {
        crate::decode::table()
            .lookup(command)
            .map(|entry| entry.kind)
            .unwrap_or(MessageKind::Unset)
    }
}

impl fmt::Display for MessageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_tokens_round_trip() {
        for kind in MessageKind::DECODED {
            let cmd = kind.command().unwrap();
            assert_eq!(MessageKind::from_command(cmd), kind, "{}", cmd);
        }
    }

    #[test]
    fn test_unset_has_no_command() {
        assert_eq!(MessageKind::Unset.command(), None);
        assert_eq!(MessageKind::from_command("CAP"), MessageKind::Unset);
        assert_eq!(MessageKind::from_command(""), MessageKind::Unset);
    }

    #[test]
    fn test_display() {
        assert_eq!(MessageKind::PrivateMessage.to_string(), "PrivateMessage");
    }
}
