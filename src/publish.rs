//! Reporting the computed version to the user.

use std::io::Write;

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::ui;

/// What to tell the user about a manifest
#[derive(Debug, Clone, PartialEq)]
pub struct Report<'a> {
    pub name: &'a str,
    pub current: &'a str,
    pub next: &'a str,
}

/// Prints the summary and hands the next version to the clipboard.
///
/// Writes the package line first, then the clipboard, then the confirmation
/// line, so a clipboard failure still leaves the user with the summary.
/// With `copy` disabled the clipboard is never touched and the last line
/// just names the next version.
///
/// # Arguments
/// * `report` - Package name, current and next version
/// * `clipboard` - Clipboard capability
/// * `out` - Destination for the human-readable lines
/// * `copy` - Whether to write the clipboard at all
///
/// # Returns
/// * `Ok(())` - Everything was written
/// * `Err(ClipboardUnavailable)` - If the clipboard write failed
/// * `Err(Io)` - If `out` could not be written
pub fn publish_result<C, W>(
    report: &Report<'_>,
    clipboard: &mut C,
    out: &mut W,
    copy: bool,
) -> Result<()>
where
    C: Clipboard + ?Sized,
    W: Write,
{
    ui::write_line(out, &ui::format_current_version(report.name, report.current))?;

    if copy {
        clipboard.set_text(report.next)?;
        ui::write_line(out, &ui::format_copied(report.next))?;
    } else {
        tracing::debug!("clipboard disabled, printing only");
        ui::write_line(out, &ui::format_next_version(report.next))?;
    }

    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboard;
    use crate::error::NextVersionError;
    use console::strip_ansi_codes;

    fn report() -> Report<'static> {
        Report {
            name: "demo",
            current: "1.2.3",
            next: "1.2.4",
        }
    }

    #[test]
    fn test_publish_copies_and_prints() {
        let mut clipboard = MockClipboard::new();
        let mut out = Vec::new();

        publish_result(&report(), &mut clipboard, &mut out, true).unwrap();

        assert_eq!(clipboard.writes(), ["1.2.4"]);
        let text = strip_ansi_codes(&String::from_utf8(out).unwrap()).to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("demo") && lines[0].contains("1.2.3"));
        assert!(lines[1].contains("Copied to clipboard") && lines[1].contains("1.2.4"));
    }

    #[test]
    fn test_publish_without_copy_leaves_clipboard_alone() {
        let mut clipboard = MockClipboard::new();
        let mut out = Vec::new();

        publish_result(&report(), &mut clipboard, &mut out, false).unwrap();

        assert!(clipboard.writes().is_empty());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("1.2.4"));
        assert!(!text.contains("Copied"));
    }

    #[test]
    fn test_clipboard_failure_after_summary() {
        let mut clipboard = MockClipboard::unavailable("no display");
        let mut out = Vec::new();

        let err = publish_result(&report(), &mut clipboard, &mut out, true).unwrap_err();

        assert!(matches!(err, NextVersionError::ClipboardUnavailable(_)));
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("demo"));
        assert!(!text.contains("Copied"));
    }
}
