//! The encrypt command.
//!
//! Resolves the secret source and the repository public key, then encrypts.
//! With a path argument the YAML file is updated in place. Without one the
//! result is printed as a snippet, or copied when `--clipboard` is set.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Password;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, Cli};
use crate::core::clipboard::ClipboardSink;
use crate::core::config::TravisConfig;
use crate::core::constants::{SECURE_KEY, TRAVIS_FILE};
use crate::core::crypto;
use crate::core::document::{Mapping, Node};
use crate::core::dotenv::EnvFile;
use crate::core::keys::KeyProvider;
use crate::core::placement::Placement;
use crate::core::yaml;
use crate::error::{Result, UsageError};

/// Run one encryption against the given key source and clipboard.
pub fn execute(cli: &Cli, keys: &dyn KeyProvider, clipboard: &dyn ClipboardSink) -> Result<()> {
    if cli.password.is_some() && cli.env_file.is_some() {
        return Err(UsageError::PasswordWithEnvFile.into());
    }
    let slug = repository_slug(cli)?;

    let pem = keys.fetch(&slug)?;
    let placement = build_placement(cli, &pem)?;

    match &cli.path {
        Some(path) => write_to_file(cli, path, &placement),
        None if cli.clipboard => copy_to_clipboard(&placement, clipboard),
        None => print_snippet(&placement),
    }
}

fn repository_slug(cli: &Cli) -> Result<String> {
    match (&cli.username, &cli.repository) {
        (Some(username), Some(repository)) => Ok(format!("{}/{}", username, repository)),
        _ => Err(UsageError::MissingRepository.into()),
    }
}

/// Encrypt the secret source into its destination shape.
fn build_placement(cli: &Cli, pem: &str) -> Result<Placement> {
    if let Some(env_path) = &cli.env_file {
        let source = EnvFile::load(env_path)?;
        info!(vars = source.entries().len(), "encrypting dotenv variables");

        let mut vars = Vec::with_capacity(source.entries().len());
        for (name, value) in source.entries() {
            let ciphertext = crypto::encrypt(pem, value.as_bytes())?;
            vars.push((name.clone(), ciphertext));
        }
        return Ok(Placement::GlobalEnvVars(vars));
    }

    let password = resolve_password(cli)?;
    let ciphertext = crypto::encrypt(pem, password.as_bytes())?;

    Ok(if cli.deploy {
        Placement::DeployPassword(ciphertext)
    } else if cli.env {
        Placement::GlobalEnv(ciphertext)
    } else {
        Placement::Password(ciphertext)
    })
}

fn resolve_password(cli: &Cli) -> Result<Zeroizing<String>> {
    if let Some(password) = &cli.password {
        return Ok(Zeroizing::new(password.clone()));
    }

    // Check if stdin is a pipe
    let password = if !io::stdin().is_terminal() {
        // Read from stdin (piped input)
        let mut input = String::new();
        io::stdin().read_line(&mut input)?;
        input.trim_end_matches(&['\r', '\n'][..]).to_string()
    } else {
        // Interactive prompt with hidden input
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Repeat for confirmation", "the passwords do not match")
            .interact()?
    };

    if password.is_empty() {
        return Err(UsageError::MissingPassword.into());
    }
    Ok(Zeroizing::new(password))
}

fn write_to_file(cli: &Cli, path: &Path, placement: &Placement) -> Result<()> {
    let mut config = TravisConfig::load(path)?;
    config.place(placement)?;
    config.save(path)?;

    info!(path = %path.display(), "travis config updated");

    if cli.clipboard {
        output::warn("--clipboard is ignored when a file path is given");
    }
    output::success(&format!(
        "secure entry written under {} in {}",
        output::key(placement.destination()),
        output::path(&path.display().to_string()),
    ));
    if let Placement::GlobalEnvVars(vars) = placement {
        for (name, _) in vars {
            output::list_item(name);
        }
    }
    Ok(())
}

fn print_snippet(placement: &Placement) -> Result<()> {
    println!();
    println!("Please add the following to your {}:", TRAVIS_FILE);
    print!("{}", render_snippet(placement)?);
    Ok(())
}

fn copy_to_clipboard(placement: &Placement, clipboard: &dyn ClipboardSink) -> Result<()> {
    let text = match placement {
        Placement::Password(ciphertext)
        | Placement::DeployPassword(ciphertext)
        | Placement::GlobalEnv(ciphertext) => ciphertext.clone(),
        Placement::GlobalEnvVars(_) => render_snippet(placement)?,
    };
    clipboard.copy(&text)?;

    output::success("The encrypted password has been copied to your clipboard.");
    Ok(())
}

/// Render just the new entries as YAML, for pasting by hand.
fn render_snippet(placement: &Placement) -> Result<String> {
    let mut snippet = Mapping::new();
    match placement {
        Placement::Password(ciphertext)
        | Placement::DeployPassword(ciphertext)
        | Placement::GlobalEnv(ciphertext) => {
            snippet.insert(SECURE_KEY, Node::string(ciphertext.clone()));
        }
        Placement::GlobalEnvVars(vars) => {
            for (name, ciphertext) in vars {
                let mut entry = Mapping::new();
                entry.insert(SECURE_KEY, Node::string(ciphertext.clone()));
                snippet.insert(name.clone(), entry);
            }
        }
    }
    Ok(yaml::encode(&snippet)?)
}
