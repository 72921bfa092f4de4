//! Dotenv secret sources.
//!
//! `--env-file` feeds an ordered set of `NAME=value` declarations into the
//! encryption pipeline; one secure entry is produced per variable, in the
//! order the file declares them.

use std::path::Path;

use tracing::debug;

use crate::error::EnvFileError;

/// A parsed .env file
#[derive(Debug, Clone)]
pub struct EnvFile {
    entries: Vec<(String, String)>,
}

impl EnvFile {
    /// Parse an .env file from disk
    ///
    /// Skips empty lines and comments (lines starting with #), strips an
    /// optional `export ` prefix, and supports values with or without
    /// quotes. Declaration order is preserved.
    ///
    /// # Errors
    ///
    /// Returns [`EnvFileError::Unreadable`] if the file cannot be read, and
    /// [`EnvFileError::NoVariables`] if no `NAME=value` line is found.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EnvFileError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| EnvFileError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let mut entries = Vec::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line = line.strip_prefix("export ").unwrap_or(line).trim_start();

            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                if key.is_empty() {
                    continue;
                }
                entries.push((key.to_string(), parse_env_value(value.trim())));
            }
        }

        if entries.is_empty() {
            return Err(EnvFileError::NoVariables(path.to_path_buf()));
        }

        debug!(path = %path.display(), vars = entries.len(), "env file parsed");
        Ok(Self { entries })
    }

    /// All entries as key-value pairs, in declaration order
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

fn parse_env_value(raw: &str) -> String {
    if raw.len() >= 2 && raw.starts_with('"') && raw.ends_with('"') {
        return unescape_double_quoted(&raw[1..raw.len() - 1]);
    }

    if raw.len() >= 2 && raw.starts_with('\'') && raw.ends_with('\'') {
        return raw[1..raw.len() - 1].to_string();
    }

    raw.to_string()
}

fn unescape_double_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }

        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('"') => out.push('"'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }

    out
}
