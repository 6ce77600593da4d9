//! Filter bins command - select high-quality bins from a `CheckM2` report.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{to_json, OutputFormat};
use crate::core::bin::BinThresholds;
use crate::core::error::PipelineError;
use crate::parsing::tsv::parse_quality_report_file;
use crate::processing::bins::{format_bin_table, select_bins, BinSelection};
use crate::utils::validation::ensure_exists;

#[derive(Args)]
pub struct FilterBinsArgs {
    /// Path to the CheckM2 quality_report.tsv file
    #[arg(value_name = "QC_FILE")]
    pub qc_file: PathBuf,

    /// Minimum completeness threshold (exclusive)
    #[arg(long, value_name = "F", default_value_t = 90.0)]
    pub completeness: f64,

    /// Maximum contamination threshold (exclusive)
    #[arg(long, value_name = "F", default_value_t = 5.0)]
    pub contamination: f64,
}

impl FilterBinsArgs {
    pub fn thresholds(&self) -> BinThresholds {
        BinThresholds {
            min_completeness: self.completeness,
            max_contamination: self.contamination,
        }
    }
}

/// Execute the filter-bins command
///
/// # Errors
///
/// Returns `NotFound` if the report is missing or `Parse` if it is malformed
/// or lacks the `Name`, `Completeness` or `Contamination` columns.
pub fn run(args: &FilterBinsArgs, format: OutputFormat) -> Result<(), PipelineError> {
    ensure_exists("QC file", &args.qc_file)?;

    let bins = parse_quality_report_file(&args.qc_file)?;
    let selection = select_bins(bins, args.thresholds());

    match format {
        OutputFormat::Text => println!("{}", format_text_selection(&selection)),
        OutputFormat::Json => println!("{}", to_json(&selection)?),
    }

    Ok(())
}

pub fn format_text_selection(selection: &BinSelection) -> String {
    format!(
        "\nHigh-Quality Bins: {}/{}\n{}",
        selection.selected.len(),
        selection.total,
        format_bin_table(&selection.selected)
    )
}
