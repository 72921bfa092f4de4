//! Command-line interface.

pub mod completions;
pub mod encrypt;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

use crate::core::clipboard::SystemClipboard;
use crate::core::constants;
use crate::core::keys::{KeyProvider, PemFileKeys, TravisKeys};

/// Travis-encrypt - encrypt secrets into your .travis.yml.
#[derive(Parser, Debug)]
#[command(
    name = "travis-encrypt",
    about = "Encrypt secrets with a repository's public key and place them in .travis.yml",
    version
)]
pub struct Cli {
    /// GitHub username or organization that owns the repository
    pub username: Option<String>,

    /// Repository name as registered on Travis CI
    pub repository: Option<String>,

    /// Path to the .travis.yml to update in place (prints a snippet when omitted)
    pub path: Option<PathBuf>,

    /// Password to encrypt (prompted for securely when omitted)
    #[arg(long)]
    pub password: Option<String>,

    /// Install the ciphertext under deploy.password
    #[arg(long, conflicts_with = "env")]
    pub deploy: bool,

    /// Install the ciphertext under env.global
    #[arg(long)]
    pub env: bool,

    /// Copy the ciphertext to the clipboard instead of printing it
    #[arg(long)]
    pub clipboard: bool,

    /// Encrypt every variable of a dotenv file into env.global
    #[arg(long, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Read the repository public key from a local PEM file instead of the API
    #[arg(long, value_name = "PATH")]
    pub key_file: Option<PathBuf>,

    /// API endpoint to fetch repository public keys from
    #[arg(long, value_name = "URL", default_value = constants::DEFAULT_API_URL)]
    pub api_url: String,

    /// Generate shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Shells a completion script can be generated for.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a parsed invocation.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    if let Some(shell) = cli.completions {
        return completions::execute(shell);
    }

    let keys: Box<dyn KeyProvider> = match &cli.key_file {
        Some(path) => Box::new(PemFileKeys::new(path)),
        None => Box::new(TravisKeys::new(&cli.api_url)),
    };
    let clipboard = SystemClipboard::new();

    encrypt::execute(&cli, keys.as_ref(), &clipboard)
}
