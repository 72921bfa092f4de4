//! System clipboard sink.
//!
//! `--clipboard` copies the ciphertext instead of printing it. Rather than
//! binding a GUI toolkit, the text is piped to whichever platform clipboard
//! utility is installed.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;
use which::which;

use crate::error::ClipboardError;

/// Receives the ciphertext when `--clipboard` is set.
pub trait ClipboardSink {
    /// Copy `text` to the clipboard.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Pipes text to the first available clipboard utility.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSink for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let (program, args) = find_utility().ok_or(ClipboardError::Unavailable)?;
        debug!(%program, "copying to clipboard");

        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::CopyFailed(format!("failed to spawn {}: {}", program, e)))?;

        // Write the text to stdin and close it so the utility can exit
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| ClipboardError::CopyFailed(format!("{}", e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::CopyFailed(format!("{}", e)))?;

        if !status.success() {
            return Err(ClipboardError::CopyFailed(format!(
                "{} exited with {}",
                program, status
            )));
        }
        Ok(())
    }
}

const NO_ARGS: &[&str] = &[];
const XCLIP_ARGS: &[&str] = &["-selection", "clipboard"];
const XSEL_ARGS: &[&str] = &["--clipboard", "--input"];

/// First installed utility from the platform's candidate list.
fn find_utility() -> Option<(&'static str, &'static [&'static str])> {
    candidates()
        .into_iter()
        .find(|(program, _)| which(program).is_ok())
}

#[cfg(target_os = "macos")]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    vec![("pbcopy", NO_ARGS)]
}

#[cfg(target_os = "windows")]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    vec![("clip", NO_ARGS)]
}

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
fn candidates() -> Vec<(&'static str, &'static [&'static str])> {
    let mut list = Vec::new();
    if std::env::var_os("WAYLAND_DISPLAY").is_some() {
        list.push(("wl-copy", NO_ARGS));
    }
    list.push(("xclip", XCLIP_ARGS));
    list.push(("xsel", XSEL_ARGS));
    list
}
