use super::strip_action;
use crate::event::{Envelope, Event, PrivateMessage, UserNoticeMessage, WhisperMessage};
use crate::fields::{self, parse_emotes, parse_msg_params, parse_timestamp, parse_user};
use crate::message::FramedLine;

pub(super) fn privmsg(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    let tags = &envelope.tags;
    let (text, is_action) = strip_action(line.body());

    Event::PrivateMessage(PrivateMessage {
        user: parse_user(tags, line.source_username),
        channel: line.channel_at(0).to_owned(),
        room_id: fields::text(tags, "room-id"),
        id: fields::text(tags, "id"),
        time: parse_timestamp(tags.get_or_empty("tmi-sent-ts")),
        emotes: parse_emotes(tags.get_or_empty("emotes"), text),
        bits: fields::number(tags, "bits"),
        text: text.to_owned(),
        is_action,
        envelope,
    })
}

pub(super) fn whisper(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    let tags = &envelope.tags;
    let (text, is_action) = match strip_action(line.body()) {
        (body, false) => match body.strip_prefix("/me ") {
            Some(rest) => (rest, true),
            None => (body, false),
        },
        stripped => stripped,
    };

    Event::Whisper(WhisperMessage {
        user: parse_user(tags, line.source_username),
        target: line.param(0).to_owned(),
        message_id: fields::text(tags, "message-id"),
        thread_id: fields::text(tags, "thread-id"),
        emotes: parse_emotes(tags.get_or_empty("emotes"), text),
        text: text.to_owned(),
        is_action,
        envelope,
    })
}

pub(super) fn usernotice(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    let tags = &envelope.tags;
    let (text, is_action) = strip_action(line.body());
    let system_msg = tags.get_or_empty("system-msg").replace('\n', "");

    Event::UserNotice(UserNoticeMessage {
        user: parse_user(tags, line.source_username),
        channel: line.channel_at(0).to_owned(),
        room_id: fields::text(tags, "room-id"),
        id: fields::text(tags, "id"),
        time: parse_timestamp(tags.get_or_empty("tmi-sent-ts")),
        emotes: parse_emotes(tags.get_or_empty("emotes"), text),
        msg_id: fields::text(tags, "msg-id"),
        msg_params: parse_msg_params(tags),
        system_msg: system_msg.trim().to_owned(),
        text: text.to_owned(),
        is_action,
        envelope,
    })
}
