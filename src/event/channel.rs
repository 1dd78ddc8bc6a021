//! Channel-scoped events: moderation, room settings, membership.

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use super::Envelope;
use crate::fields::User;

/// Chat was cleared, or a user was timed out or banned.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClearChatMessage {
    pub envelope: Envelope,
    pub channel: String,
    pub room_id: String,
    pub time: DateTime<Utc>,
    /// Login of the affected user, empty when the whole chat was cleared.
    pub target_username: String,
    pub target_user_id: String,
    /// Timeout length in seconds; zero for a permanent ban.
    pub ban_duration: u64,
    pub ban_reason: String,
}

impl ClearChatMessage {
    /// Whether this is a timeout rather than a permanent ban.
    ///
    /// Decided by the presence of `ban-duration`, not its value.
    pub fn is_timeout(&self) -> bool {
        self.envelope.tags.contains("ban-duration")
    }

    /// Human-readable description of what happened.
    ///
    /// ```
    /// let event = tmi_proto::decode(
    ///     "@ban-duration=1;ban-reason=testing\\sxd :tmi.twitch.tv CLEARCHAT #pajlada :ampzyh",
    /// );
    /// let tmi_proto::Event::ClearChat(clear) = event else { unreachable!() };
    /// assert_eq!(clear.summary(), "ampzyh was timed out for 1s: testing xd");
    /// ```
    pub fn summary(&self) -> String {
        if self.target_username.is_empty() {
            return "chat has been cleared".to_owned();
        }
        let mut summary = if self.is_timeout() {
            format!(
                "{} was timed out for {}s",
                self.target_username, self.ban_duration
            )
        } else {
            format!("{} was permanently banned", self.target_username)
        };
        if !self.ban_reason.is_empty() {
            summary.push_str(": ");
            summary.push_str(&self.ban_reason);
        }
        summary
    }
}

/// Room settings, either in full after joining or as a partial update.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoomStateMessage {
    pub envelope: Envelope,
    pub channel: String,
    pub room_id: String,
    /// Only the settings present on the line, e.g. `slow` → `10`.
    pub state: HashMap<String, i64>,
}

/// Our own identity in a channel, sent after joining or chatting.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserStateMessage {
    pub envelope: Envelope,
    pub user: User,
    pub channel: String,
    pub emote_sets: Vec<String>,
}

/// A server notice, e.g. a rejected message or a mode change.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NoticeMessage {
    pub envelope: Envelope,
    pub channel: String,
    pub msg_id: String,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserJoinMessage {
    pub envelope: Envelope,
    pub channel: String,
    /// Login of the user who joined.
    pub user: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserPartMessage {
    pub envelope: Envelope,
    pub channel: String,
    /// Login of the user who left.
    pub user: String,
}

/// Reply to a NAMES request (numeric 353).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamesMessage {
    pub envelope: Envelope,
    pub channel: String,
    pub users: Vec<String>,
}
