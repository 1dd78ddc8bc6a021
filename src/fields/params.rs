//! The `msg-param-*` bag carried by USERNOTICE lines.

use std::collections::HashMap;

use crate::message::Tags;

/// Keys whose values are coerced to integers.
const INT_PARAMS: [&str; 4] = [
    "msg-param-cumulative-months",
    "msg-param-months",
    "msg-param-streak-months",
    "msg-param-viewerCount",
];

/// Keys whose values are coerced to booleans.
const BOOL_PARAMS: [&str; 1] = ["msg-param-should-share-streak"];

/// A single `msg-param-*` value.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum MsgParam {
    Str(String),
    Int(i64),
    Bool(bool),
}

impl MsgParam {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            MsgParam::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            MsgParam::Int(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            MsgParam::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// Collect every tag whose name contains `msg-param`.
///
/// Month counts and the raid viewer count become [`MsgParam::Int`] (zero
/// when not a number), `msg-param-should-share-streak` becomes
/// [`MsgParam::Bool`] (true only for `"1"`), and anything else stays a
/// string.
pub fn parse_msg_params(tags: &Tags) -> HashMap<String, MsgParam> {
    tags.iter()
        .filter(|(key, _)| key.contains("msg-param"))
        .map(|(key, value)| {
            let param = if INT_PARAMS.contains(&key) {
                MsgParam::Int(value.parse().unwrap_or_default())
            } else if BOOL_PARAMS.contains(&key) {
                MsgParam::Bool(value == "1")
            } else {
                MsgParam::Str(value.to_owned())
            };
            (key.to_owned(), param)
        })
        .collect()
}
