//! Error types.
//!
//! Each concern gets its own enum; the top-level [`Error`] aggregates them so
//! command code can work with a single `Result` alias while `main` still
//! matches on specific failures for exit codes and hints.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Usage(#[from] UsageError),

    #[error("{0}")]
    Document(#[from] DocumentError),

    #[error("{0}")]
    Conflict(#[from] ConflictError),

    #[error("{0}")]
    Key(#[from] KeyError),

    #[error("{0}")]
    Crypto(#[from] CryptoError),

    #[error("{0}")]
    EnvFile(#[from] EnvFileError),

    #[error("{0}")]
    Clipboard(#[from] ClipboardError),

    #[error("prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Invalid combinations of command-line inputs. Exits with status 2.
#[derive(Error, Debug)]
pub enum UsageError {
    #[error("illegal usage: `--password` cannot be combined with `--env-file`")]
    PasswordWithEnvFile,

    #[error("USERNAME and REPOSITORY are required")]
    MissingRepository,

    #[error("no password given: pass `--password` or pipe one on stdin")]
    MissingPassword,
}

/// Failures reading or rendering a `.travis.yml` document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("malformed yaml: {0}")]
    Parse(#[source] serde_yaml::Error),

    #[error("the top level of the file must be a mapping, found {found}")]
    TopLevelNotMapping { found: &'static str },

    #[error("mapping keys must be strings, found {found}")]
    NonStringKey { found: &'static str },

    #[error("yaml tags are not supported: {0}")]
    UnsupportedTag(String),

    #[error("could not render yaml: {0}")]
    Emit(#[source] serde_yaml::Error),
}

/// A placement slot is already occupied by an incompatible shape.
///
/// Raised instead of silently replacing user data; the file on disk is
/// never touched when this fires.
#[derive(Error, Debug)]
#[error("cannot place a secure value at `{path}`: expected {expected}, found {found}")]
pub struct ConflictError {
    /// Dotted path of the conflicting key, e.g. `deploy.password`.
    pub path: String,
    /// Shape the placement needs at this path.
    pub expected: &'static str,
    /// Shape actually present in the document.
    pub found: &'static str,
}

/// Failures fetching or reading a repository public key.
#[derive(Error, Debug)]
pub enum KeyError {
    #[error("no public key found for repository {0}")]
    NotFound(String),

    #[error("key request failed: {0}")]
    Network(String),

    #[error("unexpected key response: {0}")]
    InvalidResponse(String),

    #[error("cannot read key file {}: {reason}", .path.display())]
    File { path: PathBuf, reason: String },
}

/// Failures in the RSA layer.
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("invalid public key: {0}")]
    InvalidPublicKey(String),

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),
}

/// Failures reading a dotenv secret source.
#[derive(Error, Debug)]
pub enum EnvFileError {
    #[error("cannot read env file {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("no variables found in {}", .0.display())]
    NoVariables(PathBuf),
}

/// Failures talking to the system clipboard.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("no clipboard utility found on this system")]
    Unavailable,

    #[error("clipboard copy failed: {0}")]
    CopyFailed(String),
}
