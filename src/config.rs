use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{NextVersionError, Result};
use crate::manifest::DEFAULT_MANIFEST;

/// Project-local configuration file name
pub const CONFIG_FILE: &str = "nextversion.toml";

/// Per-user configuration file name, looked up in the user config directory
pub const USER_CONFIG_FILE: &str = ".nextversion.toml";

/// Represents the complete configuration for next-version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub manifest: ManifestConfig,

    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

/// Where to find the manifest.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ManifestConfig {
    #[serde(default = "default_manifest_path")]
    pub path: PathBuf,
}

fn default_manifest_path() -> PathBuf {
    PathBuf::from(DEFAULT_MANIFEST)
}

impl Default for ManifestConfig {
    fn default() -> Self {
        ManifestConfig {
            path: default_manifest_path(),
        }
    }
}

/// Clipboard behavior.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ClipboardConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig { enabled: true }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `nextversion.toml` in current directory
/// 3. `.nextversion.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err(Config)` - If a file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => match discover_config() {
            Some(path) => path,
            None => {
                tracing::debug!("no configuration file found, using defaults");
                return Ok(Config::default());
            }
        },
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        NextVersionError::config(format!("cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str).map_err(|e| {
        NextVersionError::config(format!("{}: {}", path.display(), e.message().trim()))
    })
}

/// Parses configuration text.
pub fn parse_config(text: &str) -> std::result::Result<Config, toml::de::Error> {
    toml::from_str(text)
}

fn discover_config() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_FILE))
        .filter(|path| path.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.manifest.path, PathBuf::from("package.json"));
        assert!(config.clipboard.enabled);
    }

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config("[clipboard]\nenabled = false\n").unwrap();
        assert!(!config.clipboard.enabled);
        assert_eq!(config.manifest.path, PathBuf::from("package.json"));
    }

    #[test]
    fn test_parse_empty_config() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_parse_invalid_config() {
        assert!(parse_config("[clipboard]\nenabled = \"sometimes\"\n").is_err());
    }
}
