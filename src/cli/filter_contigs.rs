//! Filter contigs command - drop short records from an assembly.

use std::path::PathBuf;

use clap::Args;

use crate::cli::{to_json, OutputFormat};
use crate::core::contig::ContigFilterStats;
use crate::core::error::PipelineError;
use crate::processing::contigs::{ContigFilter, DEFAULT_MIN_LENGTH};

#[derive(Args)]
pub struct FilterContigsArgs {
    /// Input FASTA file (gzip supported)
    #[arg(short, long, value_name = "FASTA")]
    pub input: PathBuf,

    /// Output FASTA file (gzip compressed if it ends in .gz)
    #[arg(short, long, value_name = "FASTA")]
    pub output: PathBuf,

    /// Minimum contig length
    #[arg(
        long = "min_length",
        visible_alias = "min-length",
        value_name = "N",
        default_value_t = DEFAULT_MIN_LENGTH
    )]
    pub min_length: usize,
}

/// Execute the filter-contigs command
///
/// # Errors
///
/// Returns `NotFound` if the input is missing or `Io` if reading or writing
/// fails part-way. The output file is not removed on failure.
pub fn run(args: &FilterContigsArgs, format: OutputFormat) -> Result<(), PipelineError> {
    let stats = ContigFilter::new(args.min_length).filter_file(&args.input, &args.output)?;

    match format {
        OutputFormat::Text => println!("{}", format_text_summary(&stats)),
        OutputFormat::Json => println!("{}", to_json(&stats)?),
    }

    Ok(())
}

pub fn format_text_summary(stats: &ContigFilterStats) -> String {
    format!(
        "Filtered {}: Kept {}, Removed {} contigs (<{}bp)",
        stats.input.display(),
        stats.kept,
        stats.removed,
        stats.min_length
    )
}
