//! The operating system clipboard.
//!
//! On Linux the clipboard is served by whichever process owns the selection,
//! so the text vanishes when that process exits unless a clipboard manager
//! takes it over. `SystemClipboard` therefore re-runs the current executable
//! as a detached helper that keeps the selection alive with
//! [`arboard::SetExtLinux::wait`]. The binary must route into
//! [`serve_clipboard`] when [`is_clipboard_helper`] is true.
//!
//! Other platforms keep clipboard contents after the writer exits and write
//! directly.

use crate::clipboard::Clipboard;
use crate::error::{NextVersionError, Result};

/// Environment variable marking a process as the clipboard helper
pub const HELPER_ENV: &str = "NEXT_VERSION_CLIPBOARD_HELPER";

/// The operating system clipboard.
///
/// Nothing is opened on construction, so a headless host only fails once
/// there is actually something to copy.
#[derive(Debug, Default)]
pub struct SystemClipboard {
    _private: (),
}

impl SystemClipboard {
    /// Create a clipboard handle without touching the OS yet
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        write_clipboard(text)?;
        tracing::debug!(text, "wrote system clipboard");
        Ok(())
    }
}

/// Whether this process was started as the clipboard helper.
pub fn is_clipboard_helper() -> bool {
    std::env::var_os(HELPER_ENV).is_some()
}

#[cfg(not(target_os = "linux"))]
fn write_clipboard(text: &str) -> Result<()> {
    let mut clipboard =
        arboard::Clipboard::new().map_err(|e| NextVersionError::clipboard(e.to_string()))?;
    clipboard
        .set_text(text)
        .map_err(|e| NextVersionError::clipboard(e.to_string()))
}

/// Hands `text` to a detached helper process and waits for its status line.
///
/// The helper answers `ok` once the text is on the clipboard, or
/// `err <reason>` if it could not reach the clipboard. It keeps running
/// after this process exits.
#[cfg(target_os = "linux")]
fn write_clipboard(text: &str) -> Result<()> {
    use std::io::{BufRead, BufReader, Write};
    use std::process::{Command, Stdio};

    let exe = std::env::current_exe()
        .map_err(|e| NextVersionError::clipboard(format!("cannot locate executable: {}", e)))?;

    let mut child = Command::new(exe)
        .env(HELPER_ENV, "1")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| NextVersionError::clipboard(format!("cannot start helper: {}", e)))?;

    {
        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| NextVersionError::clipboard("helper stdin unavailable"))?;
        stdin
            .write_all(text.as_bytes())
            .map_err(|e| NextVersionError::clipboard(format!("cannot reach helper: {}", e)))?;
    }

    let stdout = child
        .stdout
        .take()
        .ok_or_else(|| NextVersionError::clipboard("helper stdout unavailable"))?;
    let mut status = String::new();
    BufReader::new(stdout)
        .read_line(&mut status)
        .map_err(|e| NextVersionError::clipboard(format!("no answer from helper: {}", e)))?;

    match parse_helper_status(&status) {
        Ok(()) => Ok(()),
        Err(err) => {
            let _ = child.wait();
            Err(err)
        }
    }
}

/// Interpret the helper's status line.
#[cfg(target_os = "linux")]
fn parse_helper_status(line: &str) -> Result<()> {
    let line = line.trim_end();
    if line == "ok" {
        return Ok(());
    }
    match line.strip_prefix("err ") {
        Some(reason) => Err(NextVersionError::clipboard(reason)),
        None => Err(NextVersionError::clipboard("clipboard helper exited early")),
    }
}

/// Body of the clipboard helper process.
///
/// Reads the text from stdin, places it on the clipboard, reports `ok` on
/// stdout and then keeps ownership of the selection until another
/// application replaces it. On failure reports `err <reason>` and returns
/// the error.
#[cfg(target_os = "linux")]
pub fn serve_clipboard() -> Result<()> {
    use arboard::SetExtLinux;
    use std::io::{self, Read, Write};

    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;

    let mut clipboard = match arboard::Clipboard::new().and_then(|mut c| {
        c.set_text(text.as_str())?;
        Ok(c)
    }) {
        Ok(clipboard) => clipboard,
        Err(e) => {
            let reason = e.to_string().replace('\n', " ");
            let mut stdout = io::stdout();
            writeln!(stdout, "err {}", reason)?;
            stdout.flush()?;
            return Err(NextVersionError::clipboard(reason));
        }
    };

    let mut stdout = io::stdout();
    writeln!(stdout, "ok")?;
    stdout.flush()?;

    clipboard
        .set()
        .wait()
        .text(text)
        .map_err(|e| NextVersionError::clipboard(e.to_string()))
}

/// Body of the clipboard helper process.
///
/// Only Linux needs a helper; elsewhere the text is written directly.
#[cfg(not(target_os = "linux"))]
pub fn serve_clipboard() -> Result<()> {
    Err(NextVersionError::clipboard(
        "the clipboard helper is only used on Linux",
    ))
}
