//! Command-line interface for `schemacheck`.
//!
//! Compares the fields of a parent dataset with those of a child dataset and
//! writes a plain-text report to the location named in a JSON config file.
//!
//! # Architecture
//!
//! The CLI is built using [`clap`] for argument parsing and [`tracing`] for structured logging.
//! It parses arguments, configures logging, and delegates to
//! [`schemacheck_core::compare_datasets`]. A summary table is printed after the
//! report has been written.

mod display;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::{Level, info, warn};
use tracing_log::LogTracer;
use tracing_subscriber::FmtSubscriber;

use schemacheck_core::types::ComparisonSummary;
use schemacheck_core::{Config, compare_datasets};

#[derive(Parser)]
#[command(
    name = "schemacheck",
    version,
    about = "Compare the field schema of a parent and a child geospatial dataset",
    long_about = "schemacheck checks every field of the parent dataset for a same-named field in the\n\
                  child dataset and reports missing fields, type differences and length differences."
)]
/// Command-line arguments for the `schemacheck` CLI.
struct Cli {
    /// Enable verbose (INFO level) logging output.
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug (DEBUG level) logging output with detailed diagnostics.
    #[arg(short, long)]
    debug: bool,

    /// Path to the JSON config file.
    #[arg(long, value_name = "FILE")]
    config: PathBuf,

    /// Path to the parent dataset.
    #[arg(long, value_name = "DATASET")]
    parent: PathBuf,

    /// Path to the child dataset.
    #[arg(long, value_name = "DATASET")]
    child: PathBuf,
}

/// Entry point for the `schemacheck` command-line interface.
///
/// # Errors
///
/// Returns an error if the config cannot be loaded, a dataset cannot be read,
/// the report cannot be written, or the logging system cannot be initialized.
fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    };

    // Bridge logs from the `log` crate to the `tracing` ecosystem.
    LogTracer::init()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let summary = handle_compare(&cli.config, &cli.parent, &cli.child)?;
    display::display_summary(&summary);

    Ok(())
}

fn handle_compare(config: &Path, parent: &Path, child: &Path) -> Result<ComparisonSummary> {
    let run = || -> schemacheck_core::Result<ComparisonSummary> {
        info!("Parsing config file {}", config.display());
        let config = Config::load(config)?;
        compare_datasets(parent, child, &config)
    };

    run().map_err(|err| {
        if let Some(hint) = err.recovery_suggestion() {
            warn!("{hint}");
        }
        anyhow::anyhow!(err.user_message())
    })
}
