//! Compress command implementation.

use super::CodecOptions;
use crate::utils::{Stats, open_input, open_output, report_stats};
use std::io::{Read, Write};
use textpack_core::BitWriter;
use textpack_lzw::{LzwConfig, LzwEncoder};

pub fn cmd_compress(opts: &CodecOptions<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = open_input(opts.input)?;
    let (packed, stats) = compress_stream(&mut input, opts.config)?;

    // Only touch the output once the whole input has been accepted
    let mut output = open_output(opts.output)?;
    output.write_all(&packed)?;
    output.flush()?;

    log::info!(
        "compressed {} bytes into {} codes ({} bytes)",
        stats.input_bytes,
        stats.codes.unwrap_or_default(),
        stats.output_bytes
    );
    report_stats(&stats, opts.stats)
}

/// Read all of `input` and pack its codes into a buffer.
pub fn compress_stream<R: Read>(
    input: &mut R,
    config: LzwConfig,
) -> Result<(Vec<u8>, Stats), Box<dyn std::error::Error>> {
    let mut text = Vec::new();
    input.read_to_end(&mut text)?;

    let mut encoder = LzwEncoder::new(config)?;
    let mut writer = BitWriter::new(Vec::new());
    let codes = encoder.encode_to(&text, &mut writer)?;
    let packed = writer.into_inner()?;

    let stats = Stats {
        mode: "compress",
        alphabet_bits: config.alphabet_bits,
        code_bits: config.code_bits,
        input_bytes: text.len() as u64,
        output_bytes: packed.len() as u64,
        codes: Some(codes),
        ratio: 0.0,
    }
    .with_ratio();
    Ok((packed, stats))
}
