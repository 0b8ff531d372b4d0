//! Bit-level I/O for fixed-width codewords.
//!
//! This module provides `BitReader` and `BitWriter`, which read and write
//! unsigned integers of an arbitrary bit width (1-32) over any byte stream.
//!
//! # Bit Ordering
//!
//! Values are packed MSB-first (big-endian): the most significant bit of each
//! value is written first, and bytes are filled starting from their most
//! significant bit. A 12-bit code therefore spans one and a half bytes, and
//! two consecutive codes fill exactly three bytes.
//!
//! # Example
//!
//! ```
//! use textpack_core::bitstream::{BitReader, BitWriter};
//!
//! let mut output = Vec::new();
//! {
//!     let mut writer = BitWriter::new(&mut output);
//!     writer.write_bits(0b101, 3).unwrap();
//!     writer.write_bits(0b1100, 4).unwrap();
//!     writer.close().unwrap();
//! }
//! assert_eq!(output, vec![0b1011_1000]);
//!
//! let mut reader = BitReader::new(&output[..]);
//! assert_eq!(reader.read_bits(3).unwrap(), 0b101);
//! assert_eq!(reader.read_bits(4).unwrap(), 0b1100);
//! ```

use crate::error::{Result, StreamError};
use std::io::{ErrorKind, Read, Write};

/// Mask selecting the low `bits` bits of a u64.
#[inline]
fn low_mask(bits: u8) -> u64 {
    if bits >= 64 {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

#[inline]
fn check_count(count: u8) -> Result<()> {
    if count == 0 || count > 32 {
        return Err(StreamError::InvalidBitCount(count));
    }
    Ok(())
}

/// An MSB-first bit reader that wraps any `Read` implementation.
///
/// Bytes are pulled from the underlying reader one at a time, so wrap
/// unbuffered sources (files, stdin) in a `BufReader`.
#[derive(Debug)]
pub struct BitReader<R: Read> {
    /// Underlying reader.
    reader: R,
    /// Bit buffer; valid bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of valid bits in buffer.
    bits_in_buffer: u8,
    /// Total bits read (for error reporting).
    total_bits_read: u64,
}

impl<R: Read> BitReader<R> {
    /// Create a new `BitReader` wrapping the given reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_read: 0,
        }
    }

    /// Get a reference to the underlying reader.
    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    /// Consume this `BitReader` and return the underlying reader.
    ///
    /// Any buffered bits are discarded.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Get the total number of bits read so far.
    pub fn bits_read(&self) -> u64 {
        self.total_bits_read
    }

    /// Pull one byte from the underlying reader. `None` means end of stream.
    fn next_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        loop {
            match self.reader.read(&mut byte) {
                Ok(0) => return Ok(None),
                Ok(_) => return Ok(Some(byte[0])),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Ensure at least `count` bits are available in the buffer.
    #[inline]
    fn fill_buffer(&mut self, count: u8) -> Result<()> {
        while self.bits_in_buffer < count {
            match self.next_byte()? {
                Some(byte) => {
                    self.buffer = (self.buffer << 8) | byte as u64;
                    self.bits_in_buffer += 8;
                }
                None => return Err(StreamError::unexpected_eof(self.total_bits_read)),
            }
        }
        Ok(())
    }

    /// Read a `count`-bit unsigned integer (MSB-first).
    ///
    /// # Arguments
    ///
    /// * `count` - Number of bits to read (1-32)
    pub fn read_bits(&mut self, count: u8) -> Result<u32> {
        check_count(count)?;
        self.fill_buffer(count)?;

        let shift = self.bits_in_buffer - count;
        let value = (self.buffer >> shift) & low_mask(count);

        self.bits_in_buffer -= count;
        self.buffer &= low_mask(self.bits_in_buffer);
        self.total_bits_read += count as u64;

        Ok(value as u32)
    }

    /// Read 8 bits as a byte (not necessarily byte-aligned).
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_bits(8)? as u8)
    }

    /// Read the entire remaining content as 8-bit characters.
    ///
    /// When the reader is not byte-aligned, the trailing partial byte is
    /// dropped.
    pub fn read_string(&mut self) -> Result<Vec<u8>> {
        let mut out = Vec::new();

        if self.bits_in_buffer % 8 == 0 {
            while self.bits_in_buffer > 0 {
                out.push(self.read_byte()?);
            }
            let n = self.reader.read_to_end(&mut out)?;
            self.total_bits_read += n as u64 * 8;
            return Ok(out);
        }

        loop {
            match self.read_byte() {
                Ok(byte) => out.push(byte),
                Err(StreamError::UnexpectedEof { .. }) => break,
                Err(e) => return Err(e),
            }
        }
        Ok(out)
    }

    /// Check whether the stream is exhausted.
    ///
    /// Returns `false` while any buffered bits remain.
    pub fn is_eof(&mut self) -> Result<bool> {
        if self.bits_in_buffer > 0 {
            return Ok(false);
        }
        match self.next_byte()? {
            Some(byte) => {
                self.buffer = byte as u64;
                self.bits_in_buffer = 8;
                Ok(false)
            }
            None => Ok(true),
        }
    }
}

/// An MSB-first bit writer that wraps any `Write` implementation.
///
/// `BitWriter` accumulates bits and emits complete bytes to the underlying
/// writer. Call [`close`](Self::close) when done: it pads the final partial
/// byte with zeros and flushes the sink. Dropping a writer without closing it
/// loses any partial byte.
#[derive(Debug)]
pub struct BitWriter<W: Write> {
    /// Underlying writer.
    writer: W,
    /// Bit buffer; pending bits are the low `bits_in_buffer` bits.
    buffer: u64,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
    /// Total bits written.
    total_bits_written: u64,
}

impl<W: Write> BitWriter<W> {
    /// Create a new `BitWriter` wrapping the given writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            buffer: 0,
            bits_in_buffer: 0,
            total_bits_written: 0,
        }
    }

    /// Get a reference to the underlying writer.
    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Close the writer and return the underlying sink.
    pub fn into_inner(mut self) -> Result<W> {
        self.close()?;
        Ok(self.writer)
    }

    /// Get the total number of bits written so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits_written
    }

    /// Emit complete bytes from the buffer to the writer.
    #[inline]
    fn flush_bytes(&mut self) -> Result<()> {
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.writer.write_all(&[byte])?;
            self.bits_in_buffer -= 8;
        }
        self.buffer &= low_mask(self.bits_in_buffer);
        Ok(())
    }

    /// Write `value` as a `count`-bit unsigned integer (MSB-first).
    ///
    /// Bits of `value` above `count` are ignored.
    ///
    /// # Arguments
    ///
    /// * `value` - The value to write
    /// * `count` - Number of bits to write (1-32)
    pub fn write_bits(&mut self, value: u32, count: u8) -> Result<()> {
        check_count(count)?;

        let value = value as u64 & low_mask(count);
        self.buffer = (self.buffer << count) | value;
        self.bits_in_buffer += count;
        self.total_bits_written += count as u64;

        self.flush_bytes()
    }

    /// Write a byte as 8 bits (not necessarily byte-aligned).
    pub fn write_byte(&mut self, byte: u8) -> Result<()> {
        self.write_bits(byte as u32, 8)
    }

    /// Write each character of `s` as 8 bits.
    pub fn write_string(&mut self, s: &[u8]) -> Result<()> {
        if self.bits_in_buffer == 0 {
            self.writer.write_all(s)?;
            self.total_bits_written += s.len() as u64 * 8;
            return Ok(());
        }
        for &byte in s {
            self.write_byte(byte)?;
        }
        Ok(())
    }

    /// Pad any partial byte with zeros, write it, and flush the sink.
    pub fn close(&mut self) -> Result<()> {
        if self.bits_in_buffer > 0 {
            let padding = 8 - self.bits_in_buffer;
            let byte = (self.buffer << padding) as u8;
            self.writer.write_all(&[byte])?;
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
        self.writer.flush()?;
        Ok(())
    }
}
