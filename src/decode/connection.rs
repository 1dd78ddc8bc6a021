use crate::event::{Envelope, Event, PingMessage, PongMessage, RawMessage, ReconnectMessage};
use crate::message::FramedLine;

pub(super) fn reconnect(envelope: Envelope, _line: &FramedLine<'_>) -> Event {
    Event::Reconnect(ReconnectMessage { envelope })
}

pub(super) fn ping(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    Event::Ping(PingMessage {
        message: first_token(line.param(0)),
        envelope,
    })
}

/// `PONG <server> :<payload>`; the payload is what we sent in our PING.
pub(super) fn pong(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    Event::Pong(PongMessage {
        message: first_token(line.param(1)),
        envelope,
    })
}

/// Fallback for commands without a decoder.
///
/// The body is guessed as everything from the first parameter that is not
/// a channel. This misfires for commands with several leading non-channel
/// parameters; treat it as a hint.
pub(super) fn raw(envelope: Envelope, line: &FramedLine<'_>) -> Event {
    let text = line
        .params
        .iter()
        .position(|param| !param.contains('#'))
        .map(|start| line.params[start..].join(" "))
        .unwrap_or_default();

    Event::Unset(RawMessage { envelope, text })
}

fn first_token(param: &str) -> String {
    param.split(' ').next().unwrap_or_default().to_owned()
}
