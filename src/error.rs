use thiserror::Error;

/// Unified error type for next-version operations.
///
/// Each variant renders as a single line combining the underlying cause with
/// a hint telling the user what to do about it.
#[derive(Error, Debug)]
pub enum NextVersionError {
    #[error("{source}. Run this command from a directory containing a {manifest} file.")]
    ManifestNotFound {
        manifest: String,
        source: std::io::Error,
    },

    #[error("{reason}. Verify {manifest} in this directory is a valid JSON file")]
    ManifestInvalid { manifest: String, reason: String },

    #[error("Missing valid version in {manifest}. The version is not valid: {value}")]
    VersionInvalid { manifest: String, value: String },

    #[error("Could not write to the system clipboard: {0}. Re-run with --no-copy to only print the next version")]
    ClipboardUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in next-version
pub type Result<T> = std::result::Result<T, NextVersionError>;

impl NextVersionError {
    /// Create a manifest-invalid error for the given manifest file name
    pub fn manifest_invalid(manifest: impl Into<String>, reason: impl Into<String>) -> Self {
        NextVersionError::ManifestInvalid {
            manifest: manifest.into(),
            reason: single_line(&reason.into()),
        }
    }

    /// Create a version-invalid error naming the offending value.
    ///
    /// Control characters in `value` are escaped so the message stays on one line.
    pub fn version_invalid(manifest: impl Into<String>, value: impl Into<String>) -> Self {
        NextVersionError::VersionInvalid {
            manifest: manifest.into(),
            value: single_line(&value.into()),
        }
    }

    /// Create a clipboard error with context
    pub fn clipboard(msg: impl Into<String>) -> Self {
        NextVersionError::ClipboardUnavailable(single_line(&msg.into()))
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        NextVersionError::Config(single_line(&msg.into()))
    }

    /// Process exit status reported for this error.
    ///
    /// All failures are terminal and share the same status.
    pub fn exit_code(&self) -> u8 {
        1
    }
}

/// Escape control characters (`\n`, `\t`, ...) and leave everything else as is.
fn single_line(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_control() {
                c.escape_default().to_string()
            } else {
                c.to_string()
            }
        })
        .collect()
}
