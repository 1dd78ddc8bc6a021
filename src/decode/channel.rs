use crate::event::{
    ClearChatMessage, Envelope, Event, NamesMessage, NoticeMessage, RoomStateMessage,
    UserJoinMessage, UserPartMessage, UserStateMessage,
};
use crate::fields::{self, parse_timestamp, parse_user};
use crate::message::FramedLine;

/// Room settings ROOMSTATE may carry.
const ROOM_SETTINGS: [&str; 6] = [
    "emote-only",
    "followers-only",
    "r9k",
    "rituals",
    "slow",
    "subs-only",
];

pub(super) fn clearchat(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    let tags = &envelope.tags;

    Event::ClearChat(ClearChatMessage {
        channel: line.channel_at(0).to_owned(),
        room_id: fields::text(tags, "room-id"),
        time: parse_timestamp(tags.get_or_empty("tmi-sent-ts")),
        target_username: line.param(1).to_owned(),
        target_user_id: fields::text(tags, "target-user-id"),
        ban_duration: fields::number(tags, "ban-duration"),
        ban_reason: fields::text(tags, "ban-reason"),
        envelope,
    })
}

pub(super) fn roomstate(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    let tags = &envelope.tags;
    let state = ROOM_SETTINGS
        .iter()
        .filter(|setting| tags.contains(setting))
        .map(|setting| (setting.to_string(), fields::number(tags, setting)))
        .collect();

    Event::RoomState(RoomStateMessage {
        channel: line.channel_at(0).to_owned(),
        room_id: fields::text(tags, "room-id"),
        state,
        envelope,
    })
}

pub(super) fn userstate(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    let tags = &envelope.tags;
    let emote_sets: Vec<String> = tags
        .get("emote-sets")
        .map(|sets| sets.split(',').map(str::to_owned).collect())
        .unwrap_or_default();

    Event::UserState(UserStateMessage {
        user: parse_user(tags, line.source_username),
        channel: line.channel_at(0).to_owned(),
        emote_sets,
        envelope,
    })
}

pub(super) fn notice(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    Event::Notice(NoticeMessage {
        channel: line.channel_at(0).to_owned(),
        msg_id: fields::text(&envelope.tags, "msg-id"),
        text: line.body().to_owned(),
        envelope,
    })
}

pub(super) fn join(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    Event::Join(UserJoinMessage {
        channel: line.channel_at(0).to_owned(),
        user: line.source_username.to_owned(),
        envelope,
    })
}

pub(super) fn part(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    Event::Part(UserPartMessage {
        channel: line.channel_at(0).to_owned(),
        user: line.source_username.to_owned(),
        envelope,
    })
}

pub(super) fn names(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    let (channel, users): (String, Vec<String>) = match line.params.as_slice() {
        &[_, _, channel, users] => (
            channel.strip_prefix('#').unwrap_or(channel).to_owned(),
            users.split_whitespace().map(str::to_owned).collect(),
        ),
        _ => (String::new(), Vec::new()),
    };

    Event::Names(NamesMessage {
        channel,
        users,
        envelope,
    })
}

#[cfg(test)]
mod tests {
    use crate::decode::decode;
    use crate::event::Event;

    #[test]
    fn test_clearchat_timeout() {
        let line = "@ban-duration=1;ban-reason=testing\\sxd;room-id=11148817;\
                    target-user-id=40910607 :tmi.twitch.tv CLEARCHAT #pajlada :ampzyh";
        let Event::ClearChat(clear) = decode(line) else {
            panic!("expected CLEARCHAT");
        };
        assert_eq!(clear.channel, "pajlada");
        assert_eq!(clear.target_username, "ampzyh");
        assert_eq!(clear.target_user_id, "40910607");
        assert_eq!(clear.room_id, "11148817");
        assert_eq!(clear.ban_duration, 1);
        assert!(clear.is_timeout());
        assert_eq!(clear.summary(), "ampzyh was timed out for 1s: testing xd");
    }

    #[test]
    fn test_clearchat_ban_and_clear() {
        let Event::ClearChat(ban) =
            decode("@room-id=1;target-user-id=2 :tmi.twitch.tv CLEARCHAT #chan :troll")
        else {
            panic!("expected CLEARCHAT");
        };
        assert_eq!(ban.ban_duration, 0);
        assert!(!ban.is_timeout());
        assert_eq!(ban.summary(), "troll was permanently banned");

        let Event::ClearChat(clear) = decode("@room-id=1 :tmi.twitch.tv CLEARCHAT #chan") else {
            panic!("expected CLEARCHAT");
        };
        assert_eq!(clear.target_username, "");
        assert_eq!(clear.summary(), "chat has been cleared");
    }

    #[test]
    fn test_roomstate_full() {
        let line = "@emote-only=0;followers-only=-1;r9k=0;rituals=0;room-id=11148817;slow=0;\
                    subs-only=0 :tmi.twitch.tv ROOMSTATE #pajlada";
        let Event::RoomState(room) = decode(line) else {
            panic!("expected ROOMSTATE");
        };
        assert_eq!(room.room_id, "11148817");
        assert_eq!(room.state.len(), 6);
        assert_eq!(room.state["followers-only"], -1);
        assert!(!room.state.contains_key("room-id"));
    }

    #[test]
    fn test_roomstate_partial() {
        let Event::RoomState(room) = decode("@slow=10 :tmi.twitch.tv ROOMSTATE #gempir") else {
            panic!("expected ROOMSTATE");
        };
        assert_eq!(room.channel, "gempir");
        assert_eq!(room.state.len(), 1);
        assert_eq!(room.state["slow"], 10);
    }

    #[test]
    fn test_userstate() {
        let line = "@badge-info=;badges=moderator/1;color=;display-name=Justin\\sFan;\
                    emote-sets=0,33,50,237;mod=1;subscriber=0;user-type=mod \
                    :tmi.twitch.tv USERSTATE #pajlada";
        let Event::UserState(state) = decode(line) else {
            panic!("expected USERSTATE");
        };
        assert_eq!(state.channel, "pajlada");
        assert_eq!(state.user.name, "justinfan");
        assert!(state.user.is_moderator());
        assert_eq!(state.emote_sets, vec!["0", "33", "50", "237"]);

        let Event::UserState(bare) = decode(":tmi.twitch.tv USERSTATE #pajlada") else {
            panic!("expected USERSTATE");
        };
        assert!(bare.emote_sets.is_empty());
    }

    #[test]
    fn test_notice() {
        let line = "@msg-id=subs_on :tmi.twitch.tv NOTICE #pajlada \
                    :This room is now in subscribers-only mode.";
        let Event::Notice(notice) = decode(line) else {
            panic!("expected NOTICE");
        };
        assert_eq!(notice.channel, "pajlada");
        assert_eq!(notice.msg_id, "subs_on");
        assert_eq!(notice.text, "This room is now in subscribers-only mode.");
    }

    #[test]
    fn test_join_and_part() {
        let Event::Join(join) = decode(":username123!username123@username123.tmi.twitch.tv JOIN #mychannel") else {
            panic!("expected JOIN");
        };
        assert_eq!(join.user, "username123");
        assert_eq!(join.channel, "mychannel");

        let Event::Part(part) = decode(":username123!username123@username123.tmi.twitch.tv PART #mychannel") else {
            panic!("expected PART");
        };
        assert_eq!(part.user, "username123");
        assert_eq!(part.channel, "mychannel");
    }

    #[test]
    fn test_names() {
        let line = ":justinfan1.tmi.twitch.tv 353 justinfan1 = #pajlada :alpha beta gamma";
        let Event::Names(names) = decode(line) else {
            panic!("expected NAMES");
        };
        assert_eq!(names.channel, "pajlada");
        assert_eq!(names.users, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_names_with_too_few_params() {
        let Event::Names(names) = decode(":tmi.twitch.tv 353 justinfan1 #pajlada") else {
            panic!("expected NAMES");
        };
        assert_eq!(names.channel, "");
        assert!(names.users.is_empty());
    }
}
