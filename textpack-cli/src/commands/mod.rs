//! Command implementations for TextPack CLI.

pub mod completions;
pub mod compress;
pub mod expand;

pub use completions::cmd_completions;
pub use compress::cmd_compress;
pub use expand::cmd_expand;

use crate::utils::StatsFormat;
use std::path::Path;
use textpack_lzw::LzwConfig;

/// Options for compress and expand.
#[derive(Debug)]
pub struct CodecOptions<'a> {
    pub input: Option<&'a Path>,
    pub output: Option<&'a Path>,
    pub config: LzwConfig,
    pub stats: StatsFormat,
}
