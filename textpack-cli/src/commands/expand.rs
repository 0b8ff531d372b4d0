//! Expand command implementation.

use super::CodecOptions;
use crate::utils::{Stats, open_input, open_output, report_stats};
use std::io::{Read, Write};
use textpack_lzw::{LzwConfig, LzwDecoder};

pub fn cmd_expand(opts: &CodecOptions<'_>) -> Result<(), Box<dyn std::error::Error>> {
    let mut input = open_input(opts.input)?;
    let (text, stats) = expand_stream(&mut input, opts.config)?;

    // A corrupt stream must not leave partial text behind
    let mut output = open_output(opts.output)?;
    output.write_all(&text)?;
    output.flush()?;

    log::info!(
        "expanded {} bytes into {} bytes",
        stats.input_bytes,
        stats.output_bytes
    );
    report_stats(&stats, opts.stats)
}

/// Decode the packed codes in `input` up to the EOF code.
///
/// Nothing is returned unless the whole stream decodes.
pub fn expand_stream<R: Read>(
    input: &mut R,
    config: LzwConfig,
) -> Result<(Vec<u8>, Stats), Box<dyn std::error::Error>> {
    let mut packed = Vec::new();
    input.read_to_end(&mut packed)?;

    let mut decoder = LzwDecoder::new(config)?;
    let text = decoder.decode(&packed)?;

    let stats = Stats {
        mode: "expand",
        alphabet_bits: config.alphabet_bits,
        code_bits: config.code_bits,
        input_bytes: packed.len() as u64,
        output_bytes: text.len() as u64,
        codes: None,
        ratio: 0.0,
    }
    .with_ratio();
    Ok((text, stats))
}
