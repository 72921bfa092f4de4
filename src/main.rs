//! Travis-encrypt - encrypt secrets into your .travis.yml.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use travis_encrypt::cli::output;
use travis_encrypt::cli::{execute, Cli};
use travis_encrypt::error::{ClipboardError, Error, KeyError};

fn main() {
    let cli = Cli::parse();

    // TRAVIS_ENCRYPT_LOG wins over --verbose when both are present
    let filter = EnvFilter::try_from_env("TRAVIS_ENCRYPT_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("travis_encrypt=debug")
        } else {
            EnvFilter::new("travis_encrypt=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        let error_msg = e.to_string();
        let suggestion = match &e {
            Error::Key(KeyError::NotFound(_)) => {
                Some("check the repository slug, or pass --key-file to use a local key")
            }
            Error::Conflict(_) => Some("edit the conflicting key in your .travis.yml and re-run"),
            Error::Clipboard(ClipboardError::Unavailable) => {
                Some("install xclip, xsel, or wl-clipboard, or drop --clipboard")
            }
            _ => None,
        };

        output::error(&error_msg);
        if let Some(hint) = suggestion {
            output::hint(hint);
        }

        let code = if matches!(e, Error::Usage(_)) { 2 } else { 1 };
        std::process::exit(code);
    }
}
