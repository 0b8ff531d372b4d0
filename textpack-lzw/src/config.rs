//! LZW configuration: alphabet and code widths.

use crate::error::{LzwError, Result};

/// LZW configuration parameters.
///
/// Codes are always exactly `code_bits` wide. The table holds
/// `2^code_bits` codes: the single characters of the alphabet, the EOF
/// sentinel, then learned strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Width of an input character in bits (7 for ASCII text).
    pub alphabet_bits: u8,
    /// Width of every emitted codeword in bits.
    pub code_bits: u8,
}

impl LzwConfig {
    /// 7-bit text with 12-bit codes.
    ///
    /// - 128 single-character codes (0-127)
    /// - EOF code 128
    /// - 4096-entry table
    pub const TEXT: Self = Self {
        alphabet_bits: 7,
        code_bits: 12,
    };

    /// Full 8-bit alphabet with 12-bit codes (EOF code 256).
    pub const BYTES: Self = Self {
        alphabet_bits: 8,
        code_bits: 12,
    };

    /// Create a validated configuration.
    pub fn new(alphabet_bits: u8, code_bits: u8) -> Result<Self> {
        let config = Self {
            alphabet_bits,
            code_bits,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check that the widths describe a usable table.
    ///
    /// The EOF code must fit below the capacity, and codes must fit in a u16.
    pub fn validate(&self) -> Result<()> {
        if self.alphabet_bits == 0
            || self.alphabet_bits > 8
            || self.code_bits <= self.alphabet_bits
            || self.code_bits > 16
        {
            return Err(LzwError::InvalidConfig {
                alphabet_bits: self.alphabet_bits,
                code_bits: self.code_bits,
            });
        }
        Ok(())
    }

    /// Number of single-character codes (R).
    pub fn radix(&self) -> u16 {
        1 << self.alphabet_bits
    }

    /// Largest input symbol accepted by the encoder.
    pub fn max_symbol(&self) -> u8 {
        (self.radix() - 1) as u8
    }

    /// End-of-stream sentinel code.
    pub fn eof_code(&self) -> u16 {
        self.radix()
    }

    /// First code available for learned strings.
    pub fn first_code(&self) -> u16 {
        self.eof_code() + 1
    }

    /// Total number of codes (L = 2^W).
    ///
    /// Returned as `usize` because a 16-bit table holds 65536 codes.
    pub fn capacity(&self) -> usize {
        1usize << self.code_bits
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::TEXT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_config() {
        let config = LzwConfig::TEXT;
        assert_eq!(config.radix(), 128);
        assert_eq!(config.max_symbol(), 127);
        assert_eq!(config.eof_code(), 128);
        assert_eq!(config.first_code(), 129);
        assert_eq!(config.capacity(), 4096);
        assert_eq!(LzwConfig::default(), config);
    }

    #[test]
    fn test_bytes_config() {
        let config = LzwConfig::BYTES;
        assert_eq!(config.radix(), 256);
        assert_eq!(config.max_symbol(), 255);
        assert_eq!(config.eof_code(), 256);
        assert_eq!(config.first_code(), 257);
    }

    #[test]
    fn test_invalid_widths() {
        assert!(LzwConfig::new(0, 12).is_err());
        assert!(LzwConfig::new(9, 12).is_err());
        assert!(LzwConfig::new(7, 7).is_err());
        assert!(LzwConfig::new(7, 17).is_err());
        assert!(LzwConfig::new(8, 16).is_ok());
        assert_eq!(LzwConfig::new(8, 16).unwrap().capacity(), 65536);
    }
}
