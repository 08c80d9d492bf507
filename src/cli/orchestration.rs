//! Main workflow orchestration logic
//!
//! Runs the four stages in order: read the manifest, parse it, compute the
//! next version, publish the result. The first failing stage ends the run.
//! Nothing here depends on clap, the working directory or a real clipboard,
//! so the whole workflow can be driven from tests.

use std::io::Write;
use std::path::PathBuf;

use semver::Version;

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::domain::version::next_version;
use crate::domain::VersionBump;
use crate::error::Result;
use crate::manifest::{manifest_name, parse_manifest, read_manifest};
use crate::publish::{publish_result, Report};

/// Arguments for the pipeline
///
/// Mirrors the CLI flags after they have been merged with the configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineArgs {
    /// Manifest to read
    pub manifest_path: PathBuf,

    /// Write the next version to the clipboard
    pub copy_to_clipboard: bool,
}

impl PipelineArgs {
    /// Arguments taken straight from a configuration
    pub fn from_config(config: &Config) -> Self {
        PipelineArgs {
            manifest_path: config.manifest.path.clone(),
            copy_to_clipboard: config.clipboard.enabled,
        }
    }
}

impl Default for PipelineArgs {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Result of a successful pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineOutcome {
    /// Package name from the manifest
    pub name: String,

    /// Version as written in the manifest
    pub current: String,

    /// The computed successor
    pub next: Version,

    /// Which bump produced `next`
    pub bump: VersionBump,

    /// Whether `next` was written to the clipboard
    pub copied: bool,
}

/// Run the full pipeline once.
///
/// # Arguments
///
/// * `args` - Manifest location and clipboard switch
/// * `clipboard` - Clipboard capability
/// * `out` - Destination for the summary lines
///
/// # Returns
///
/// The computed version and what was done with it, or the first stage error
pub fn run_pipeline<C, W>(
    args: &PipelineArgs,
    clipboard: &mut C,
    out: &mut W,
) -> Result<PipelineOutcome>
where
    C: Clipboard + ?Sized,
    W: Write,
{
    let manifest = manifest_name(&args.manifest_path);

    let text = read_manifest(&args.manifest_path)?;
    let record = parse_manifest(&text, &manifest)?;
    let computed = next_version(record.version.as_ref(), &manifest)?;

    let current = record.version_display();
    let next = computed.next.to_string();
    let report = Report {
        name: record.name(),
        current: &current,
        next: &next,
    };
    publish_result(&report, clipboard, out, args.copy_to_clipboard)?;

    Ok(PipelineOutcome {
        name: record.name().to_string(),
        current,
        next: computed.next,
        bump: computed.bump,
        copied: args.copy_to_clipboard,
    })
}
