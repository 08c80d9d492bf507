//! Manifest reading and decoding.
//!
//! The manifest path is always passed in explicitly; nothing here looks at
//! the process working directory.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;

use crate::domain::PackageRecord;
use crate::error::{NextVersionError, Result};

/// Default manifest file name, resolved against the working directory.
pub const DEFAULT_MANIFEST: &str = "package.json";

/// File name shown to the user for a manifest path.
///
/// Falls back to the full path when it has no final component.
pub fn manifest_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Reads the full manifest text.
///
/// # Arguments
/// * `path` - Location of the manifest file
///
/// # Returns
/// * `Ok(String)` - The UTF-8 contents
/// * `Err(ManifestNotFound)` - If the file is missing or unreadable
/// * `Err(ManifestInvalid)` - If the file exists but is not UTF-8
pub fn read_manifest(path: &Path) -> Result<String> {
    tracing::debug!(path = %path.display(), "reading manifest");

    fs::read_to_string(path).map_err(|source| {
        let manifest = manifest_name(path);
        match source.kind() {
            ErrorKind::InvalidData => {
                NextVersionError::manifest_invalid(manifest, source.to_string())
            }
            _ => NextVersionError::ManifestNotFound { manifest, source },
        }
    })
}

/// Decodes manifest text into a [`PackageRecord`].
///
/// The text must be a JSON object with a non-empty string `name`. The
/// `version` field is not inspected here.
///
/// # Arguments
/// * `text` - Manifest contents
/// * `manifest` - File name used in error messages
///
/// # Returns
/// * `Ok(PackageRecord)` - The decoded record
/// * `Err(ManifestInvalid)` - If the text is not a valid manifest
pub fn parse_manifest(text: &str, manifest: &str) -> Result<PackageRecord> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| NextVersionError::manifest_invalid(manifest, e.to_string()))?;

    if !value.is_object() {
        return Err(NextVersionError::manifest_invalid(
            manifest,
            "expected a JSON object at the top level",
        ));
    }

    let record: PackageRecord = serde_json::from_value(value)
        .map_err(|e| NextVersionError::manifest_invalid(manifest, e.to_string()))?;

    if record.name().is_empty() {
        return Err(NextVersionError::manifest_invalid(
            manifest,
            "missing a non-empty \"name\" field",
        ));
    }

    tracing::debug!(name = record.name(), "parsed manifest");
    Ok(record)
}
