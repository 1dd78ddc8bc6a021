//! Property-based tests for line decoding.
//!
//! Uses proptest to generate random TMI components and verify that:
//! 1. Decoding never panics, whatever the input
//! 2. Decoding is deterministic
//! 3. Tag values survive an escape/decode round trip
//! 4. Supported commands always map to their kind

use proptest::prelude::*;
use tmi_proto::{decode, escape_tag_value, Event, MessageKind};

// =============================================================================
// STRATEGIES - Generators for TMI line components
// =============================================================================

/// Twitch login: lower-case letters, digits and underscores.
fn login_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_]{1,25}").expect("valid regex")
}

/// Channel name without the leading `#`.
fn channel_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_]{1,25}").expect("valid regex")
}

/// Message text that doesn't contain CR/LF.
fn message_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\0]{0,400}").expect("valid regex")
}

fn tag_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9\\-]{0,30}").expect("valid regex")
}

/// Tag value before escaping: anything but line breaks and NUL.
fn tag_value_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[^\r\n\0]{0,60}").expect("valid regex")
}

fn command_strategy() -> impl Strategy<Value = (String, MessageKind)> {
    prop::sample::select(MessageKind::DECODED.to_vec())
        .prop_map(|kind| (kind.command().unwrap_or_default().to_owned(), kind))
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn decode_never_panics(line in "\\PC{0,300}") {
        let event = decode(&line);
        prop_assert_eq!(event.raw(), line.as_str());
    }

    #[test]
    fn decode_never_panics_on_tagged_shapes(
        tags in "@[a-z\\-=;/,:0-9\\\\]{0,80}",
        rest in "[ :!#@a-zA-Z0-9\u{1}]{0,80}",
    ) {
        let line = format!("{} {}", tags, rest);
        let event = decode(&line);
        prop_assert_eq!(event.raw(), line.as_str());
    }

    #[test]
    fn decode_is_deterministic(line in "\\PC{0,200}") {
        prop_assert_eq!(decode(&line), decode(&line));
    }

    #[test]
    fn tag_values_round_trip(key in tag_key_strategy(), value in tag_value_strategy()) {
        let mut escaped = String::new();
        escape_tag_value(&mut escaped, &value).unwrap();
        let line = format!("@{}={} :tmi.twitch.tv NOTICE #c :x", key, escaped);

        let event = decode(&line);
        prop_assert_eq!(event.tags().get(&key), Some(value.as_str()));
    }

    #[test]
    fn supported_commands_map_to_kind(
        (command, kind) in command_strategy(),
        login in login_strategy(),
        channel in channel_strategy(),
        text in message_text_strategy(),
    ) {
        let line = format!(":{0}!{0}@{0}.tmi.twitch.tv {1} #{2} :{3}", login, command, channel, text);
        let event = decode(&line);
        prop_assert_eq!(event.kind(), kind);
        prop_assert_eq!(event.raw_command(), command.as_str());
    }

    #[test]
    fn privmsg_body_and_sender(
        login in login_strategy(),
        channel in channel_strategy(),
        text in message_text_strategy(),
    ) {
        let line = format!(":{0}!{0}@{0}.tmi.twitch.tv PRIVMSG #{1} :{2}", login, channel, text);
        match decode(&line) {
            Event::PrivateMessage(msg) => {
                prop_assert_eq!(msg.user.name, login);
                prop_assert_eq!(msg.channel, channel);
                if !msg.is_action {
                    prop_assert_eq!(msg.text, text);
                }
            }
            other => prop_assert!(false, "unexpected event {:?}", other),
        }
    }

    #[test]
    fn unknown_commands_are_unset(command in "[A-Z]{3,12}") {
        prop_assume!(MessageKind::from_command(&command) == MessageKind::Unset);
        let line = format!(":tmi.twitch.tv {} #c :payload", command);
        let event = decode(&line);
        prop_assert_eq!(event.kind(), MessageKind::Unset);
        prop_assert_eq!(event.text(), Some("payload"));
    }
}
