//! TextPack CLI - fixed-width LZW text compression
//!
//! Compresses 7-bit text into a stream of 12-bit LZW codes and expands it back.

mod commands;
mod utils;

use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use commands::{cmd_completions, cmd_compress, cmd_expand};
use std::path::PathBuf;
use textpack_lzw::LzwConfig;

#[derive(Parser)]
#[command(name = "textpack")]
#[command(author, version, about = "Fixed-width LZW text compression")]
#[command(long_about = "
TextPack compresses 7-bit text with LZW, emitting fixed-width codes
(12 bits by default) packed MSB-first. Input defaults to stdin and
output to stdout.

Examples:
  textpack compress -i notes.txt -o notes.lzw
  textpack expand -i notes.lzw -o notes.txt
  cat notes.txt | textpack c | textpack x
  textpack compress --stats -i book.txt -o book.lzw
  textpack completions bash > textpack.bash
")]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress text into LZW codes
    #[command(alias = "c")]
    Compress(CodecArgs),

    /// Expand LZW codes back into text
    #[command(visible_alias = "decompress", alias = "x")]
    Expand(CodecArgs),

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Options shared by compress and expand.
#[derive(Args, Debug, Clone)]
struct CodecArgs {
    /// Input file (stdin if omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Output file (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Width of every code in bits
    #[arg(long, default_value_t = LzwConfig::TEXT.code_bits)]
    code_bits: u8,

    /// Width of an input character in bits
    #[arg(long, default_value_t = LzwConfig::TEXT.alphabet_bits)]
    alphabet_bits: u8,

    /// Print sizes and ratio to stderr
    #[arg(long)]
    stats: bool,

    /// Print stats as JSON (implies --stats)
    #[arg(long)]
    json: bool,
}

impl CodecArgs {
    fn options(&self) -> Result<commands::CodecOptions<'_>, Box<dyn std::error::Error>> {
        Ok(commands::CodecOptions {
            input: self.input.as_deref(),
            output: self.output.as_deref(),
            config: LzwConfig::new(self.alphabet_bits, self.code_bits)?,
            stats: if self.json {
                utils::StatsFormat::Json
            } else if self.stats {
                utils::StatsFormat::Text
            } else {
                utils::StatsFormat::None
            },
        })
    }
}

fn main() {
    let cli = Cli::parse();
    utils::init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Compress(args) => args.options().and_then(|opts| cmd_compress(&opts)),
        Commands::Expand(args) => args.options().and_then(|opts| cmd_expand(&opts)),
        Commands::Completions { shell } => cmd_completions(shell, &mut Cli::command()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
