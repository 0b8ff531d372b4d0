//! Completions command implementation.

use clap::Command;
use clap_complete::{Shell, generate};
use std::io::{self, Write};

pub fn cmd_completions(shell: Shell, cmd: &mut Command) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout().lock();
    write_completions(shell, cmd, &mut stdout);
    stdout.flush()?;
    Ok(())
}

/// Render the completion script for `shell` into `out`.
pub fn write_completions(shell: Shell, cmd: &mut Command, out: &mut dyn Write) {
    let name = cmd.get_name().to_string();
    generate(shell, cmd, name, out);
}
