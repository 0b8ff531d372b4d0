//! LZW encoder (compression).

use crate::config::LzwConfig;
use crate::dictionary::PrefixDictionary;
use crate::error::{LzwError, Result};
use std::io::Write;
use textpack_core::BitWriter;

/// One step of the encoding loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Step {
    /// Code emitted for the matched prefix.
    pub code: u16,
    /// Length of the matched prefix.
    pub len: usize,
}

/// LZW encoder for compression.
#[derive(Debug)]
pub struct LzwEncoder {
    config: LzwConfig,
    /// Dictionary for longest-prefix lookup.
    dict: PrefixDictionary,
    /// Next code to assign; the dictionary is frozen once it reaches capacity.
    next_code: usize,
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        let mut encoder = Self {
            config,
            dict: PrefixDictionary::with_capacity(config.capacity()),
            next_code: config.first_code() as usize,
        };
        encoder.reset();
        Ok(encoder)
    }

    /// Check whether the dictionary still holds only the single characters.
    fn is_fresh(&self) -> bool {
        self.next_code == self.config.first_code() as usize
    }

    /// Reset the encoder to its initial state.
    pub fn reset(&mut self) {
        self.dict.clear();
        self.dict.seed_alphabet(self.config.radix());
        self.next_code = self.config.first_code() as usize;
    }

    /// Get the configuration.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Get the next code that will be assigned.
    pub fn next_code(&self) -> usize {
        self.next_code
    }

    /// Number of strings currently in the dictionary.
    pub fn dictionary_len(&self) -> usize {
        self.dict.len()
    }

    /// Check if the dictionary has stopped growing.
    pub fn is_full(&self) -> bool {
        self.next_code >= self.config.capacity()
    }

    /// Reject input containing symbols outside the alphabet.
    fn validate_input(&self, input: &[u8]) -> Result<()> {
        let max_symbol = self.config.max_symbol();
        match input.iter().position(|&b| b > max_symbol) {
            Some(offset) => Err(LzwError::InvalidSymbol {
                symbol: input[offset],
                offset,
                max_symbol,
            }),
            None => Ok(()),
        }
    }

    /// Emit the code for the longest known prefix at `index` and learn the
    /// prefix extended by the following character.
    pub(crate) fn step(&mut self, input: &[u8], index: usize) -> Result<Step> {
        let prefix = self.dict.longest_prefix_match(input, index);
        let code = self.dict.lookup_code(prefix)?;
        let len = prefix.len();

        let lookahead = index + len;
        if self.next_code < self.config.capacity() && lookahead < input.len() {
            let mut entry = Vec::with_capacity(len + 1);
            entry.extend_from_slice(prefix);
            entry.push(input[lookahead]);
            self.dict.insert(&entry, self.next_code as u16)?;
            self.next_code += 1;

            if self.next_code == self.config.capacity() {
                log::debug!("code table saturated at input offset {lookahead}");
            }
        }

        Ok(Step { code, len })
    }

    /// Run the encoding loop, handing every codeword (EOF included) to `emit`.
    ///
    /// # Algorithm
    ///
    /// 1. Start from the single-character dictionary
    /// 2. Find the longest dictionary string at the current offset
    /// 3. Emit its code
    /// 4. Add that string plus the next character, while codes remain
    /// 5. Advance past the matched string and repeat
    /// 6. Emit the EOF code
    fn encode_with<F>(&mut self, input: &[u8], mut emit: F) -> Result<usize>
    where
        F: FnMut(u16) -> Result<()>,
    {
        self.validate_input(input)?;
        if !self.is_fresh() {
            self.reset();
        }

        let mut index = 0;
        let mut count = 0;
        while index < input.len() {
            let step = self.step(input, index)?;
            log::trace!("offset {index}: code {} ({} chars)", step.code, step.len);
            emit(step.code)?;
            count += 1;
            index += step.len;
        }

        emit(self.config.eof_code())?;
        count += 1;

        log::debug!(
            "encoded {} bytes into {} codes, {} dictionary entries",
            input.len(),
            count,
            self.dict.len()
        );
        Ok(count)
    }

    /// Encode `input` into the writer and close it.
    ///
    /// Returns the number of codewords written, EOF included. Input is
    /// checked against the alphabet before anything is written.
    pub fn encode_to<W: Write>(&mut self, input: &[u8], writer: &mut BitWriter<W>) -> Result<usize> {
        let bits = self.config.code_bits;
        let count = self.encode_with(input, |code| {
            writer.write_bits(code as u32, bits)?;
            Ok(())
        })?;
        writer.close()?;
        Ok(count)
    }

    /// Encode data with LZW compression.
    ///
    /// # Returns
    ///
    /// Packed codewords, MSB-first, zero-padded to a whole byte.
    pub fn encode(&mut self, input: &[u8]) -> Result<Vec<u8>> {
        let mut writer = BitWriter::new(Vec::new());
        self.encode_to(input, &mut writer)?;
        Ok(writer.into_inner()?)
    }

    /// Encode data into its codeword sequence, EOF included.
    pub fn encode_codes(&mut self, input: &[u8]) -> Result<Vec<u16>> {
        let mut codes = Vec::new();
        self.encode_with(input, |code| {
            codes.push(code);
            Ok(())
        })?;
        Ok(codes)
    }
}
