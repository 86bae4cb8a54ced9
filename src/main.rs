//! Command-line interface for the dashforge binary.
//!
//! The CLI loads a YAML dashboard manifest, decodes it into a builder-ready
//! dashboard, and writes the result as JSON to standard output.

use std::{
    io,
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Parser};
use dashforge::{Dashboard, Error, load_dashboard};
use tracing_subscriber::EnvFilter;

/// Command line interface for decoding dashboard manifests.
#[derive(Debug, Parser,)]
#[command(name = "dashforge", version, about = "Decode dashboard manifests into builder JSON")]
struct Cli
{
    /// Path to the YAML manifest describing the dashboard.
    #[arg(long = "manifest", alias = "config", value_name = "PATH")]
    manifest: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
fn main()
{
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env(),).init();

    if let Err(error,) = run() {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from manifest loading and decoding.
fn run() -> Result<(), Error,>
{
    let cli = Cli::parse();
    run_manifest_from_path(&cli.manifest, cli.pretty,)
}

fn run_manifest_from_path(path: &Path, pretty: bool,) -> Result<(), Error,>
{
    let dashboard = load_dashboard(path,)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_dashboard(&mut handle, &dashboard, pretty,)
}

fn write_dashboard<W: io::Write,>(
    writer: &mut W,
    dashboard: &Dashboard,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, dashboard,)?;
    } else {
        serde_json::to_writer(writer, dashboard,)?;
    }

    Ok((),)
}
