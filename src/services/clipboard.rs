//! Clipboard hand-off.
//!
//! The application copies generated passwords through the [`Clipboard`]
//! trait; [`SystemClipboard`] pipes the text into the platform clipboard
//! utility. Failures stay at this boundary: callers report them to the
//! user and carry on.

use std::io::Write;
use std::process::{Command, Stdio};

use zeroize::Zeroize;

use crate::types::errors::ClipboardError;

/// Trait defining the clipboard hand-off.
pub trait Clipboard {
    /// Copies `text` to the system clipboard.
    fn copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Clipboard implementation backed by the platform's clipboard utility.
///
/// On Linux, Wayland and X11 tools are tried in order; the first one
/// that spawns handles the copy.
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        SystemClipboard
    }

    /// Candidate clipboard commands for the current platform.
    fn candidates() -> &'static [(&'static str, &'static [&'static str])] {
        #[cfg(target_os = "linux")]
        {
            &[
                ("wl-copy", &[]),
                ("xclip", &["-selection", "clipboard"]),
                ("xsel", &["--clipboard", "--input"]),
            ]
        }
        #[cfg(target_os = "macos")]
        {
            &[("pbcopy", &[])]
        }
        #[cfg(target_os = "windows")]
        {
            &[("clip", &[])]
        }
    }

    /// Pipes `buffer` into one command's stdin and waits for it to exit.
    fn pipe_to(
        command: &str,
        args: &[&str],
        buffer: &[u8],
    ) -> Result<(), ClipboardError> {
        let mut child = Command::new(command)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipboardError::Unavailable(format!("{}: {}", command, e)))?;

        {
            let stdin = child
                .stdin
                .as_mut()
                .ok_or_else(|| ClipboardError::CopyFailed(format!("{}: no stdin", command)))?;
            stdin
                .write_all(buffer)
                .map_err(|e| ClipboardError::CopyFailed(format!("{}: {}", command, e)))?;
        }

        let status = child
            .wait()
            .map_err(|e| ClipboardError::CopyFailed(format!("{}: {}", command, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(ClipboardError::CopyFailed(format!(
                "{} exited with {}",
                command, status
            )))
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn copy(&self, text: &str) -> Result<(), ClipboardError> {
        let mut buffer = text.as_bytes().to_vec();
        let mut last_error = ClipboardError::Unavailable("no clipboard utility found".to_string());

        for &(command, args) in Self::candidates() {
            match Self::pipe_to(command, args, &buffer) {
                Ok(()) => {
                    buffer.zeroize();
                    return Ok(());
                }
                Err(e) => last_error = e,
            }
        }

        buffer.zeroize();
        Err(last_error)
    }
}
