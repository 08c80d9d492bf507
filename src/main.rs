use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use next_version::cli::{run_pipeline, PipelineArgs};
use next_version::clipboard::system::{is_clipboard_helper, serve_clipboard};
use next_version::clipboard::SystemClipboard;
use next_version::{config, ui, NextVersionError};

/// Environment variable holding the log filter
const LOG_ENV: &str = "NEXT_VERSION_LOG";

#[derive(clap::Parser)]
#[command(
    name = "next-version",
    version,
    about = "Copy the next semantic version of package.json to the clipboard"
)]
struct Args {
    #[arg(short, long, help = "Manifest to read [default: ./package.json]")]
    manifest: Option<PathBuf>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(long, help = "Print the next version without touching the clipboard")]
    no_copy: bool,

    #[arg(short, long, help = "Print debug diagnostics to stderr")]
    verbose: bool,
}

fn main() -> ExitCode {
    // Detached child started by SystemClipboard to keep the selection alive.
    if is_clipboard_helper() {
        return match serve_clipboard() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => ExitCode::from(err.exit_code()),
        };
    }

    let args = Args::parse();

    if let Err(e) = init_tracing(args.verbose) {
        eprintln!("{}", e);
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            ui::display_error(&err);
            let code = err
                .downcast_ref::<NextVersionError>()
                .map_or(1, NextVersionError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;

    let mut pipeline = PipelineArgs::from_config(&config);
    if let Some(manifest) = args.manifest {
        pipeline.manifest_path = manifest;
    }
    if args.no_copy {
        pipeline.copy_to_clipboard = false;
    }

    let mut clipboard = SystemClipboard::new();
    let stdout = io::stdout();
    let outcome = run_pipeline(&pipeline, &mut clipboard, &mut stdout.lock())?;

    tracing::debug!(
        name = %outcome.name,
        next = %outcome.next,
        copied = outcome.copied,
        "done"
    );
    Ok(())
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "next_version=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {}", e))
}
