//! Tokio codec turning a byte stream into decoded events.
//!
//! The transport owns the socket; this module only frames the bytes it
//! reads into lines and runs each line through [`decode`].

use bytes::{Buf, BytesMut};
use tokio::io::AsyncRead;
use tokio_util::codec::{Decoder, FramedRead};
use tracing::{debug, warn};

use crate::decode::decode;
use crate::error::{ProtocolError, Result};
use crate::event::Event;

/// Default maximum line length in bytes, terminator excluded.
///
/// Twitch allows tag blocks of up to 8 KiB on top of the 512-byte body
/// limit of classic IRC.
pub const MAX_LINE_LEN: usize = 8191;

/// Line-delimited decoder yielding one [`Event`] per line.
///
/// Lines end in `\n`; a preceding `\r` is stripped and blank lines are
/// skipped. A line longer than the configured limit is an error; it is
/// dropped and the lines after it still decode.
#[derive(Clone, Debug)]
pub struct EventCodec {
    next_index: usize,
    max_line_len: usize,
}

impl EventCodec {
    pub fn new() -> EventCodec {
        EventCodec::with_max_line_len(MAX_LINE_LEN)
    }

    /// Create a codec with a custom maximum line length.
    pub fn with_max_line_len(max_line_len: usize) -> EventCodec {
        EventCodec {
            next_index: 0,
            max_line_len,
        }
    }

    pub fn max_line_len(&self) -> usize {
        self.max_line_len
    }

    /// Drop the first `discard` bytes of `src` and report the line as too long.
    fn too_long(&mut self, src: &mut BytesMut, discard: usize, actual: usize) -> ProtocolError {
        warn!(
            actual,
            limit = self.max_line_len,
            "discarding line over the length limit"
        );
        src.advance(discard);
        self.next_index = 0;
        ProtocolError::MessageTooLong {
            actual,
            limit: self.max_line_len,
        }
    }

    fn decode_line(line: &[u8]) -> Result<Option<Event>> {
        let line = String::from_utf8(line.to_vec())?;
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            debug!("skipping blank line");
            return Ok(None);
        }
        Ok(Some(decode(line)))
    }
}

impl Default for EventCodec {
    fn default() -> Self {
        EventCodec::new()
    }
}

impl Decoder for EventCodec {
    type Item = Event;
    type Error = ProtocolError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Event>> {
        loop {
            let newline = src[self.next_index..].iter().position(|b| *b == b'\n');
            let Some(offset) = newline else {
                if src.len() > self.max_line_len {
                    let actual = src.len();
                    return Err(self.too_long(src, actual, actual));
                }
                // resume the search where this one stopped
                self.next_index = src.len();
                return Ok(None);
            };

            let end = self.next_index + offset;
            self.next_index = 0;
            let len = if end > 0 && src[end - 1] == b'\r' {
                end - 1
            } else {
                end
            };
            if len > self.max_line_len {
                // only the offending line goes; later lines stay buffered
                return Err(self.too_long(src, end + 1, len));
            }

            let line = src.split_to(end + 1);
            if let Some(event) = Self::decode_line(&line)? {
                return Ok(Some(event));
            }
        }
    }

    fn decode_eof(&mut self, src: &mut BytesMut) -> Result<Option<Event>> {
        if let Some(event) = self.decode(src)? {
            return Ok(Some(event));
        }
        self.next_index = 0;
        if src.is_empty() {
            return Ok(None);
        }
        let rest = src.split_to(src.len());
        Self::decode_line(&rest)
    }
}

/// Stream of events read from `reader`, one per line.
pub fn event_stream<R: AsyncRead>(reader: R) -> FramedRead<R, EventCodec> {
    FramedRead::new(reader, EventCodec::new())
}
