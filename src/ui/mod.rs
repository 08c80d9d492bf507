//! User interface module - console output.
//!
//! - `formatter` - Pure formatting functions
//! - This module - Writing formatted lines to a stream

use std::fmt::Display;
use std::io::{self, Write};

pub mod formatter;

pub use formatter::{format_copied, format_current_version, format_error, format_next_version};

/// Write one line to `out`.
pub fn write_line<W: Write>(out: &mut W, line: &str) -> io::Result<()> {
    writeln!(out, "{}", line)
}

/// Write an error as a single line to `out`.
pub fn write_error<W: Write>(out: &mut W, message: &dyn Display) -> io::Result<()> {
    write_line(out, &format_error(message))?;
    out.flush()
}

/// Print an error as a single line on standard output.
///
/// Failures to write are ignored: the process is about to exit with a
/// non-zero status anyway.
pub fn display_error(message: &dyn Display) {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    let _ = write_error(&mut handle, message);
}
