//! # TextPack Core
//!
//! Core components shared by the TextPack codec and command-line tool.
//!
//! - [`bitstream`]: MSB-first bit-level I/O for fixed-width codewords
//! - [`error`]: Stream error types
//!
//! ## Example
//!
//! ```rust
//! use textpack_core::bitstream::{BitReader, BitWriter};
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(97, 12).unwrap();
//!     writer.write_bits(128, 12).unwrap();
//!     writer.close().unwrap();
//! }
//! assert_eq!(output, vec![0x06, 0x10, 0x80]);
//!
//! let mut reader = BitReader::new(&output[..]);
//! assert_eq!(reader.read_bits(12).unwrap(), 97);
//! assert_eq!(reader.read_bits(12).unwrap(), 128);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod error;

pub use bitstream::{BitReader, BitWriter};
pub use error::{Result, StreamError};
