//! # TextPack-LZW: Fixed-Width LZW Text Compression
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! for text, with a fixed code width and a fixed-capacity code table.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Trie dictionary**: Longest-prefix lookup in one walk of a ternary search trie
//! - **Fixed-width codes**: Every codeword is exactly `code_bits` wide (12 by default)
//! - **Freeze on saturation**: Once the table is full, compression continues
//!   with the strings already learned
//!
//! ## Stream Format
//!
//! - **Alphabet**: 7-bit characters (0-127) by default, each its own code
//! - **EOF code**: 128 (the alphabet size), reserved and never reassigned
//! - **Learned codes**: 129-4095, assigned in order, one per encoding step
//! - **Packing**: MSB-first, final byte zero-padded
//! - **No header**: No length prefix and no checksum
//!
//! ## Example
//!
//! ```rust
//! use textpack_lzw::{compress_text, decompress_text};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress_text(original).unwrap();
//! let decompressed = decompress_text(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! ## Self-Referential Codes
//!
//! The encoder may emit a code on the step right after learning it, before the
//! decoder has seen enough to learn it too. The decoder resolves it as the
//! previous string plus its own first character:
//!
//! ```rust
//! use textpack_lzw::{LzwConfig, LzwDecoder};
//!
//! let mut decoder = LzwDecoder::new(LzwConfig::TEXT).unwrap();
//! // "AAAA" = A, AA (code 129), A, EOF
//! let decoded = decoder.decode_codes(&[65, 129, 65, 128]).unwrap();
//! assert_eq!(decoded, b"AAAA");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use config::LzwConfig;
pub use decoder::LzwDecoder;
pub use dictionary::PrefixDictionary;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};

/// Decompress LZW-compressed data with the given configuration.
///
/// # Example
///
/// ```rust
/// use textpack_lzw::{compress, decompress, LzwConfig};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original, LzwConfig::TEXT).unwrap();
/// let decompressed = decompress(&compressed, LzwConfig::TEXT).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn decompress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(config)?;
    decoder.decode(data)
}

/// Compress data with LZW using the given configuration.
///
/// # Errors
///
/// [`LzwError::InvalidSymbol`] if `data` contains a byte outside the
/// configured alphabet.
///
/// # Example
///
/// ```rust
/// use textpack_lzw::{compress, LzwConfig};
///
/// let data = b"TOBEORNOTTOBEORTOBEORNOT".repeat(8);
/// let compressed = compress(&data, LzwConfig::TEXT).unwrap();
/// assert!(compressed.len() < data.len());
/// ```
pub fn compress(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(config)?;
    encoder.encode(data)
}

/// Decompress 7-bit text data (convenience function).
///
/// This is equivalent to `decompress(data, LzwConfig::TEXT)`.
pub fn decompress_text(data: &[u8]) -> Result<Vec<u8>> {
    decompress(data, LzwConfig::TEXT)
}

/// Compress 7-bit text (convenience function).
///
/// This is equivalent to `compress(data, LzwConfig::TEXT)`.
///
/// # Example
///
/// ```rust
/// use textpack_lzw::compress_text;
///
/// // "a" then EOF: two 12-bit codes
/// assert_eq!(compress_text(b"a").unwrap(), vec![0x06, 0x10, 0x80]);
/// ```
pub fn compress_text(data: &[u8]) -> Result<Vec<u8>> {
    compress(data, LzwConfig::TEXT)
}
