//! QC stats command - summarise a fastp JSON report.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{to_json, OutputFormat};
use crate::core::error::PipelineError;
use crate::core::qc::QcSummary;
use crate::parsing::fastp::parse_fastp_file;

#[derive(Args)]
pub struct QcStatsArgs {
    /// Path to the fastp JSON output file
    #[arg(value_name = "JSON_FILE")]
    pub json_file: PathBuf,
}

/// Execute the qc-stats command
///
/// # Errors
///
/// Returns `NotFound` if the report is missing, `MissingField` if a summary
/// key is absent, or `Parse` if the JSON is malformed.
pub fn run(args: &QcStatsArgs, format: OutputFormat) -> Result<(), PipelineError> {
    let summary = parse_fastp_file(&args.json_file)?;

    match format {
        OutputFormat::Text => print!("{}", format_text_summary(&summary)),
        OutputFormat::Json => println!("{}", to_json(&summary)?),
    }

    Ok(())
}

pub fn format_text_summary(summary: &QcSummary) -> String {
    format!(
        "\n=== QC SUMMARY ===\n\
         Reads before filtering: {}\n\
         Reads after filtering: {}\n\
         Q30 rate (after): {:.2}%\n\
         GC content: {:.2}%\n",
        summary.reads_before,
        summary.reads_after,
        summary.q30_percent(),
        summary.gc_percent(),
    )
}
