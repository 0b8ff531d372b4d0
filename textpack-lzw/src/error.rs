//! LZW-specific error types.

use textpack_core::StreamError;
use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// Alphabet or code width outside the supported range.
    #[error(
        "Invalid configuration: alphabet_bits={alphabet_bits}, code_bits={code_bits} \
         (need 1 <= alphabet_bits <= 8 and alphabet_bits < code_bits <= 16)"
    )]
    InvalidConfig {
        /// Requested alphabet width in bits.
        alphabet_bits: u8,
        /// Requested code width in bits.
        code_bits: u8,
    },

    /// Input character outside the configured alphabet.
    #[error("Symbol {symbol:#04x} at offset {offset} is outside the alphabet (max {max_symbol:#04x})")]
    InvalidSymbol {
        /// Offending input byte.
        symbol: u8,
        /// Byte offset of the symbol in the input.
        offset: usize,
        /// Largest symbol the alphabet accepts.
        max_symbol: u8,
    },

    /// Dictionary lookup for a key that was never registered.
    #[error("Key of length {len} is not registered in the dictionary")]
    UnknownKey {
        /// Length of the missing key.
        len: usize,
    },

    /// Attempt to register an empty key.
    #[error("Cannot register an empty key")]
    EmptyKey,

    /// Codeword referencing a table slot that cannot be resolved.
    #[error("Invalid LZW code: {code} (next assignable code is {next_code})")]
    InvalidCode {
        /// The offending codeword.
        code: u16,
        /// Code the decoder would assign next.
        next_code: usize,
    },

    /// Codeword stream ended before the EOF code.
    #[error("Unexpected end of data at bit position {position}")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        position: u64,
    },

    /// Codeword pushed after the EOF code was already seen.
    #[error("Code {0} received after end of stream")]
    AfterEof(u16),

    /// Bit-stream error other than a premature end of data.
    #[error("Stream error: {0}")]
    Stream(StreamError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<StreamError> for LzwError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::UnexpectedEof { position } => Self::UnexpectedEof { position },
            StreamError::Io(e) => Self::Io(e),
            other => Self::Stream(other),
        }
    }
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
