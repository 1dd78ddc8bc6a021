//! Fuzz target for TMI line decoding
//!
//! Feeds arbitrary input to the decoder and the stream codec and checks
//! that neither panics and that the decoded event keeps the raw line.

#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use std::str;
use tokio_util::codec::Decoder;

fuzz_target!(|data: &[u8]| {
    // Only decode valid UTF-8 directly; the codec sees the raw bytes
    if let Ok(input) = str::from_utf8(data) {
        let event = tmi_proto::decode(input);
        assert_eq!(event.raw(), input);
    }

    let mut codec = tmi_proto::EventCodec::with_max_line_len(512);
    let mut buf = BytesMut::from(data);
    while let Ok(Some(_)) = codec.decode(&mut buf) {}
});
