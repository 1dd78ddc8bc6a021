//! Shared sub-decoders for tag-borne fields.
//!
//! These turn individual tag values into typed fields and are reused by
//! several type-specific decoders.

pub mod emote;
pub mod params;
pub mod time;
pub mod user;

use std::str::FromStr;

use crate::message::Tags;

pub use self::emote::{parse_emotes, Emote};
pub use self::params::{parse_msg_params, MsgParam};
pub use self::time::{is_unset_time, parse_timestamp};
pub use self::user::{parse_badges, parse_user, User};

/// Numeric tag value, or the type's zero when the tag is absent or not a
/// number.
pub(crate) fn number<T>(tags: &Tags, key: &str) -> T
where
    T: FromStr + Default,
{
    tags.get(key)
        .and_then(|value| value.parse().ok())
        .unwrap_or_default()
}

/// Owned copy of a tag value, empty when absent.
pub(crate) fn text(tags: &Tags, key: &str) -> String {
    tags.get_or_empty(key).to_owned()
}
