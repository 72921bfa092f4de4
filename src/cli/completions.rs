//! Shell completion script generation.
//!
//! Backs the `--completions` flag. The script for the requested shell is
//! printed to stdout and the process exits without touching any repository
//! or key material.

use clap::CommandFactory;
use clap_complete::{generate, Shell as CompletionShell};

use crate::cli::{Cli, Shell};
use crate::error::Result;

/// Print a completion script for `shell` to stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
    };

    generate(shell, &mut cmd, "travis-encrypt", &mut std::io::stdout());
    Ok(())
}
