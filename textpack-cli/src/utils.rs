//! Utility functions for the CLI.

use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::Path;

/// How to report sizes after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatsFormat {
    None,
    Text,
    Json,
}

/// Sizes of one compress or expand run.
#[derive(Debug, Serialize)]
pub struct Stats {
    pub mode: &'static str,
    pub alphabet_bits: u8,
    pub code_bits: u8,
    pub input_bytes: u64,
    pub output_bytes: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codes: Option<usize>,
    /// Compressed size as a fraction of the text size.
    pub ratio: f64,
}

impl Stats {
    /// Text size and compressed size in the order the ratio needs them.
    fn sizes(&self) -> (u64, u64) {
        if self.mode == "compress" {
            (self.input_bytes, self.output_bytes)
        } else {
            (self.output_bytes, self.input_bytes)
        }
    }

    /// Fill in `ratio` from the byte counts.
    pub fn with_ratio(mut self) -> Self {
        let (text, packed) = self.sizes();
        self.ratio = if text > 0 {
            packed as f64 / text as f64
        } else {
            0.0
        };
        self
    }
}

/// Write stats to stderr in the requested format.
pub fn report_stats(stats: &Stats, format: StatsFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        StatsFormat::None => {}
        StatsFormat::Text => {
            let (text, packed) = stats.sizes();
            eprintln!(
                "{}: {} -> {} bytes ({} bits/code)",
                stats.mode, stats.input_bytes, stats.output_bytes, stats.code_bits
            );
            if text > 0 {
                eprintln!(
                    "  ratio: {:.1}% ({:.2} bits/char)",
                    stats.ratio * 100.0,
                    packed as f64 * 8.0 / text as f64
                );
            }
        }
        StatsFormat::Json => {
            eprintln!("{}", serde_json::to_string_pretty(stats)?);
        }
    }
    Ok(())
}

/// Open the input file, or stdin if none is given.
pub fn open_input(path: Option<&Path>) -> io::Result<Box<dyn Read>> {
    Ok(match path {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin().lock())),
    })
}

/// Create the output file, or use stdout if none is given.
pub fn open_output(path: Option<&Path>) -> io::Result<Box<dyn Write>> {
    Ok(match path {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    })
}

/// Initialise `env_logger` from the `-v` count; `RUST_LOG` takes precedence.
pub fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
