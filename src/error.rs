//! Error types for the TMI protocol library.
//!
//! Decoding a single line never fails: malformed structure degrades to
//! empty or zero fields. The errors here belong to the byte-stream boundary,
//! where raw bytes are framed into lines before they reach the decoder.

use thiserror::Error;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Errors raised while framing a byte stream into protocol lines.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A line was not valid UTF-8.
    #[error("decode error: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    /// A line exceeded the configured maximum length.
    #[error("message too long: {actual} bytes (limit {limit})")]
    MessageTooLong {
        /// Number of bytes buffered without a line terminator.
        actual: usize,
        /// The configured limit.
        limit: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::MessageTooLong {
            actual: 9000,
            limit: 8191,
        };
        assert_eq!(
            format!("{}", err),
            "message too long: 9000 bytes (limit 8191)"
        );
    }

    #[test]
    fn test_error_conversion() {
        let io_err =
            std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let protocol_err: ProtocolError = io_err.into();

        match protocol_err {
            ProtocolError::Io(_) => {} // Expected
            _ => panic!("Expected Io variant"),
        }

        let utf8_err = String::from_utf8(vec![0xff, 0xfe]).unwrap_err();
        let protocol_err: ProtocolError = utf8_err.into();

        match protocol_err {
            ProtocolError::Decode(_) => {} // Expected
            _ => panic!("Expected Decode variant"),
        }
    }

    #[test]
    fn test_error_source_chaining() {
        let utf8_err = String::from_utf8(vec![b'a', 0xc3]).unwrap_err();
        let protocol_err = ProtocolError::Decode(utf8_err);

        // thiserror's #[from] also marks the field as the source
        let source = std::error::Error::source(&protocol_err);
        assert!(source.is_some());
    }
}
