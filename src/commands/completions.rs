use crate::core::error::Result;
use clap_complete::{generate, Shell};
use std::io;

/// Writes a completion script for the given shell to stdout.
pub fn execute_completions(shell: Shell, cmd: &mut clap::Command) -> Result<()> {
    let bin_name = cmd.get_name().to_string();
    generate(shell, cmd, bin_name, &mut io::stdout());
    Ok(())
}
