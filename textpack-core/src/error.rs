//! Error types for bit-stream operations.

use std::io;
use thiserror::Error;

/// Errors raised by [`BitReader`](crate::BitReader) and [`BitWriter`](crate::BitWriter).
#[derive(Debug, Error)]
pub enum StreamError {
    /// I/O error from underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream ended in the middle of a value.
    #[error("Unexpected end of stream at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        position: u64,
    },

    /// Requested bit count is outside the supported range.
    #[error("Invalid bit count: {0} (must be 1-32)")]
    InvalidBitCount(u8),
}

/// Result type alias for stream operations.
pub type Result<T> = std::result::Result<T, StreamError>;

impl StreamError {
    /// Create an unexpected EOF error.
    pub fn unexpected_eof(position: u64) -> Self {
        Self::UnexpectedEof { position }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StreamError::unexpected_eof(36);
        assert!(err.to_string().contains("bit position 36"));

        let err = StreamError::InvalidBitCount(40);
        assert!(err.to_string().contains("40"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: StreamError = io_err.into();
        assert!(matches!(err, StreamError::Io(_)));
    }
}
