//! Version validation and next-version arithmetic.
//!
//! Increments follow the npm semver `inc` rules for the two bumps this tool
//! performs: `prerelease` when the current version carries a prerelease
//! label, `patch` otherwise.

use crate::error::{NextVersionError, Result};
use semver::{BuildMetadata, Prerelease, Version};
use serde_json::Value;

/// Version bump type decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionBump {
    /// Bump the trailing numeric prerelease identifier
    Prerelease,
    /// Bump the patch component
    Patch,
}

impl VersionBump {
    /// Choose the bump for a version: prerelease versions stay prereleases.
    pub fn for_version(version: &Version) -> Self {
        if version.pre.is_empty() {
            VersionBump::Patch
        } else {
            VersionBump::Prerelease
        }
    }
}

/// Result of computing the next version for a manifest
#[derive(Debug, Clone, PartialEq)]
pub struct NextVersion {
    pub current: Version,
    pub next: Version,
    pub bump: VersionBump,
}

/// Longest version string accepted, in characters
pub const MAX_LENGTH: usize = 256;

/// Largest numeric component (2^53 - 1), the npm registry's limit
pub const MAX_SAFE_COMPONENT: u64 = 9_007_199_254_740_991;

/// Parse a version string, tolerating surrounding whitespace and a leading `v`.
///
/// Rejects strings longer than [`MAX_LENGTH`] and major, minor or patch
/// components above [`MAX_SAFE_COMPONENT`].
pub fn parse_version(raw: &str) -> Option<Version> {
    if raw.chars().count() > MAX_LENGTH {
        return None;
    }

    let trimmed = raw.trim();
    let clean = trimmed.strip_prefix('v').unwrap_or(trimmed);
    if clean.is_empty() {
        return None;
    }

    let version = Version::parse(clean).ok()?;
    [version.major, version.minor, version.patch]
        .iter()
        .all(|&n| n <= MAX_SAFE_COMPONENT)
        .then_some(version)
}

/// Validate the raw `version` field of a manifest.
///
/// # Arguments
/// * `raw` - The JSON value of the field, `None` when absent
/// * `manifest` - Manifest file name used in the error message
///
/// # Returns
/// * `Ok(Version)` - The parsed semantic version
/// * `Err(VersionInvalid)` - If the field is absent, not a string, or not semver
pub fn validate_version(raw: Option<&Value>, manifest: &str) -> Result<Version> {
    match raw {
        Some(Value::String(s)) => parse_version(s)
            .ok_or_else(|| NextVersionError::version_invalid(manifest, s.as_str())),
        Some(other) => Err(NextVersionError::version_invalid(manifest, other.to_string())),
        None => Err(NextVersionError::version_invalid(manifest, "undefined")),
    }
}

/// Apply a bump to a version.
///
/// Build metadata is always dropped. A patch bump clears the prerelease; a
/// prerelease bump increments the right-most numeric identifier, or appends
/// `.0` when the label has none.
///
/// # Returns
/// * `Some(Version)` - The bumped version
/// * `None` - If a counter would overflow
///
/// # Example
/// ```ignore
/// let v = Version::parse("1.2.3-alpha.1").unwrap();
/// assert_eq!(increment(&v, VersionBump::Prerelease).unwrap().to_string(), "1.2.3-alpha.2");
/// ```
pub fn increment(version: &Version, bump: VersionBump) -> Option<Version> {
    let mut next = version.clone();
    next.build = BuildMetadata::EMPTY;

    match bump {
        VersionBump::Patch => {
            // A prerelease of X.Y.Z patches to X.Y.Z itself.
            if version.pre.is_empty() {
                next.patch = version.patch.checked_add(1)?;
            }
            next.pre = Prerelease::EMPTY;
        }
        VersionBump::Prerelease if version.pre.is_empty() => {
            next.patch = version.patch.checked_add(1)?;
            next.pre = Prerelease::new("0").ok()?;
        }
        VersionBump::Prerelease => {
            next.pre = increment_prerelease(&version.pre)?;
        }
    }

    Some(next)
}

fn increment_prerelease(pre: &Prerelease) -> Option<Prerelease> {
    let mut identifiers: Vec<String> = pre.as_str().split('.').map(str::to_owned).collect();

    // Digits too large for a safe integer count as plain labels, not counters.
    let numeric = identifiers.iter().rposition(|id| {
        id.chars().all(|c| c.is_ascii_digit())
            && id.parse::<u64>().is_ok_and(|n| n < MAX_SAFE_COMPONENT)
    });

    match numeric {
        Some(i) => {
            let counter: u64 = identifiers[i].parse().ok()?;
            identifiers[i] = counter.checked_add(1)?.to_string();
        }
        None => identifiers.push("0".to_string()),
    }

    Prerelease::new(&identifiers.join(".")).ok()
}

/// Validate the raw version field and compute its successor.
pub fn next_version(raw: Option<&Value>, manifest: &str) -> Result<NextVersion> {
    let current = validate_version(raw, manifest)?;
    let bump = VersionBump::for_version(&current);
    let next = increment(&current, bump).ok_or_else(|| {
        NextVersionError::version_invalid(manifest, format!("{} (counter overflow)", current))
    })?;

    tracing::debug!(%current, %next, ?bump, "computed next version");

    Ok(NextVersion {
        current,
        next,
        bump,
    })
}
