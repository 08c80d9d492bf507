//! Pure formatting functions for UI output.
//!
//! Everything here returns a `String`; writing it somewhere is the caller's
//! job. Styling goes through `console`, which leaves the text plain when the
//! output is not a terminal.

use std::fmt::Display;

use console::style;

/// Summary line naming the package and its current version.
pub fn format_current_version(name: &str, version: &str) -> String {
    format!(
        "📦 {} is version {}",
        style(name).cyan(),
        style(version).yellow()
    )
}

/// Confirmation line naming the value placed on the clipboard.
pub fn format_copied(next: &str) -> String {
    format!(
        "📋 Copied to clipboard next version => {}",
        style(next).green()
    )
}

/// Result line used when the clipboard is skipped.
pub fn format_next_version(next: &str) -> String {
    format!("➡️  Next version => {}", style(next).green())
}

/// Single error line.
pub fn format_error(message: &dyn Display) -> String {
    format!("{} {}", style("✖").red().bold(), style(message).red())
}
