//! LZW decoder (decompression).
//!
//! The decoder rebuilds the encoder's dictionary from the code stream alone:
//! every code after the first teaches it the string "previous string plus
//! first character of the current one", which is exactly the entry the
//! encoder learned one step earlier.

use crate::config::LzwConfig;
use crate::error::{LzwError, Result};
use std::io::{Read, Write};
use textpack_core::BitReader;

/// LZW decoder for decompression.
#[derive(Debug)]
pub struct LzwDecoder {
    config: LzwConfig,
    /// Code table: code -> string. `None` marks a slot not yet learned.
    table: Vec<Option<Vec<u8>>>,
    /// Next code to assign.
    next_code: usize,
    /// Previously decoded code.
    prev: Option<u16>,
    /// Whether the EOF code has been seen.
    finished: bool,
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        let mut decoder = Self {
            config,
            table: Vec::with_capacity(config.capacity()),
            next_code: 0,
            prev: None,
            finished: false,
        };
        decoder.reset();
        Ok(decoder)
    }

    /// Reset the decoder to its initial state.
    pub fn reset(&mut self) {
        self.table.clear();
        for c in 0..self.config.radix() {
            self.table.push(Some(vec![c as u8]));
        }
        // EOF slot: populated but never emitted
        self.table.push(Some(Vec::new()));
        self.table.resize(self.config.capacity(), None);

        self.next_code = self.config.first_code() as usize;
        self.prev = None;
        self.finished = false;
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> usize {
        self.next_code
    }

    /// Check whether nothing has been decoded since the last reset.
    fn is_fresh(&self) -> bool {
        self.prev.is_none() && !self.finished
    }

    /// Check whether the EOF code has been decoded.
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Check whether `code` currently maps to a string.
    pub fn is_assigned(&self, code: u16) -> bool {
        self.table
            .get(code as usize)
            .is_some_and(|slot| slot.is_some())
    }

    fn invalid(&self, code: u16) -> LzwError {
        LzwError::InvalidCode {
            code,
            next_code: self.next_code,
        }
    }

    /// Feed one codeword.
    ///
    /// Returns the string it stands for, or `None` for the EOF code. Codes
    /// pushed after EOF are rejected.
    pub fn push_code(&mut self, code: u16) -> Result<Option<&[u8]>> {
        if self.finished {
            return Err(LzwError::AfterEof(code));
        }
        if code == self.config.eof_code() {
            self.finished = true;
            return Ok(None);
        }

        let slot = code as usize;
        if slot >= self.table.len() {
            return Err(self.invalid(code));
        }

        let Some(prev) = self.prev else {
            // Nothing has been learned yet, so only single characters are valid
            if code >= self.config.radix() {
                return Err(self.invalid(code));
            }
            self.prev = Some(code);
            return Ok(self.table[slot].as_deref());
        };

        let Some(prev_entry) = self.table[prev as usize].as_deref() else {
            return Err(self.invalid(prev));
        };

        // First character of the current string. An unassigned slot is only
        // legal when it is the code the encoder minted on its previous step
        // (slot == next_code): the encoder used it before we could derive it.
        // Its string is then the previous string plus its own first character,
        // so the first character is prev_entry[0]. Any other unassigned slot
        // means the stream is corrupt.
        let first = match self.table[slot].as_deref() {
            Some(entry) => entry[0],
            None if slot == self.next_code => prev_entry[0],
            None => return Err(self.invalid(code)),
        };

        if self.next_code < self.config.capacity() {
            let mut learned = Vec::with_capacity(prev_entry.len() + 1);
            learned.extend_from_slice(prev_entry);
            learned.push(first);
            self.table[self.next_code] = Some(learned);
            self.next_code += 1;
        }

        self.prev = Some(code);
        Ok(self.table[slot].as_deref())
    }

    /// Decode codewords from `reader` into `output` until the EOF code.
    ///
    /// Returns the number of bytes written. The stream must contain the EOF
    /// code; anything after it is padding and left unread.
    pub fn decode_from<R: Read, W: Write>(
        &mut self,
        reader: &mut BitReader<R>,
        output: &mut W,
    ) -> Result<u64> {
        if !self.is_fresh() {
            self.reset();
        }
        let bits = self.config.code_bits;

        let mut written = 0u64;
        let mut codes = 0usize;
        loop {
            let code = reader.read_bits(bits)? as u16;
            codes += 1;
            log::trace!("code {code}");
            match self.push_code(code)? {
                Some(entry) => {
                    output.write_all(entry)?;
                    written += entry.len() as u64;
                }
                None => break,
            }
        }
        output.flush()?;

        log::debug!(
            "decoded {} codes into {} bytes, next code {}",
            codes,
            written,
            self.next_code
        );
        Ok(written)
    }

    /// Decode LZW-compressed data.
    pub fn decode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut reader = BitReader::new(input);
        let mut output = Vec::with_capacity(input.len() * 2);
        self.decode_from(&mut reader, &mut output)?;
        Ok(output)
    }

    /// Decode a codeword sequence that ends with the EOF code.
    pub fn decode_codes(&mut self, codes: &[u16]) -> Result<Vec<u8>> {
        if !self.is_fresh() {
            self.reset();
        }

        let mut output = Vec::new();
        for &code in codes {
            match self.push_code(code)? {
                Some(entry) => output.extend_from_slice(entry),
                None => return Ok(output),
            }
        }

        Err(LzwError::UnexpectedEof {
            position: codes.len() as u64 * self.config.code_bits as u64,
        })
    }
}
