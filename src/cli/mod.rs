//! Command-line interface for metagen-utils.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **qc-stats**: Print read counts, Q30 rate and GC content from a fastp report
//! - **filter-contigs**: Drop contigs shorter than a minimum length
//! - **filter-bins**: List `CheckM2` bins passing completeness/contamination thresholds
//! - **read-config**: Flatten a YAML config into shell `KEY=value` lines
//!
//! Each command is also built as a standalone binary (`extract-qc-stats`,
//! `filter-contigs`, `filter-hq-bins`, `read-config`) sharing the same
//! arguments.
//!
//! ## Usage
//!
//! ```text
//! # Summarise a fastp run
//! metagen-utils qc-stats fastp.json
//!
//! # Keep contigs of at least 1 kb
//! metagen-utils filter-contigs -i contigs.fasta -o long.fasta --min_length 1000
//!
//! # High-quality bins as JSON
//! metagen-utils --format json filter-bins quality_report.tsv --completeness 95
//!
//! # Load the pipeline config into the current shell
//! eval "$(read-config config.yaml)"
//! ```

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::core::error::PipelineError;

pub mod filter_bins;
pub mod filter_contigs;
pub mod qc_stats;
pub mod read_config;

#[derive(Parser)]
#[command(name = "metagen-utils")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Helper commands for a metagenomic assembly and binning pipeline")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the read summary of a fastp JSON report
    QcStats(qc_stats::QcStatsArgs),

    /// Filter contigs by length
    FilterContigs(filter_contigs::FilterContigsArgs),

    /// Select high-quality bins from a CheckM2 report
    FilterBins(filter_bins::FilterBinsArgs),

    /// Print a YAML config as shell KEY=value lines
    ReadConfig(read_config::ReadConfigArgs),
}

/// Flags shared by the standalone binaries
#[derive(clap::Args)]
pub struct CommonArgs {
    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// Run the selected subcommand
    ///
    /// # Errors
    ///
    /// Returns whatever error the subcommand reports.
    pub fn execute(&self) -> Result<(), PipelineError> {
        match &self.command {
            Commands::QcStats(args) => qc_stats::run(args, self.format),
            Commands::FilterContigs(args) => filter_contigs::run(args, self.format),
            Commands::FilterBins(args) => filter_bins::run(args, self.format),
            Commands::ReadConfig(args) => read_config::run(args, self.format),
        }
    }
}

/// Initialize logging based on verbosity flag. Logs always go to stderr so
/// that stdout carries only command output.
pub fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("metagen_utils=debug,info")
    } else {
        EnvFilter::new("metagen_utils=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Report a command's outcome: one `Error: ...` line on stderr and exit
/// code 1 on failure.
pub fn exit_status(result: Result<(), PipelineError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

pub(crate) fn to_json<T: serde::Serialize>(value: &T) -> Result<String, PipelineError> {
    Ok(serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?)
}
