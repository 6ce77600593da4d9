//! Parser for `CheckM2` `quality_report.tsv` files.
//!
//! The first non-blank line is a header. Only the `Name`, `Completeness` and
//! `Contamination` columns are read; any other columns are ignored.

use std::path::Path;

use crate::core::bin::BinQuality;
use crate::core::error::PipelineError;

const NAME_COLUMN: &str = "Name";
const COMPLETENESS_COLUMN: &str = "Completeness";
const CONTAMINATION_COLUMN: &str = "Contamination";

/// Read and parse a quality report.
///
/// # Errors
///
/// Returns `PipelineError::NotFound` if the file does not exist,
/// `PipelineError::Io` if it cannot be read, or `PipelineError::Parse`
/// if the content is invalid or not UTF-8.
pub fn parse_quality_report_file(path: &Path) -> Result<Vec<BinQuality>, PipelineError> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| PipelineError::from_open("QC file", path, e))?;
    parse_quality_report_text(&content, '\t')
}

/// Parse quality report text with the given delimiter.
///
/// # Errors
///
/// Returns `PipelineError::Parse` if there is no header, a required column is
/// missing, a row has the wrong number of fields, or a metric is not a number.
pub fn parse_quality_report_text(
    text: &str,
    delimiter: char,
) -> Result<Vec<BinQuality>, PipelineError> {
    let context = "quality report";
    let mut lines = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty());

    let (_, header) = lines
        .next()
        .ok_or_else(|| PipelineError::parse(context, "No columns to parse from file"))?;
    let columns: Vec<&str> = header.split(delimiter).map(str::trim).collect();

    let find = |name: &str| {
        columns
            .iter()
            .position(|c| *c == name)
            .ok_or_else(|| PipelineError::parse(context, format!("missing column '{name}'")))
    };
    let name_idx = find(NAME_COLUMN)?;
    let completeness_idx = find(COMPLETENESS_COLUMN)?;
    let contamination_idx = find(CONTAMINATION_COLUMN)?;

    let mut bins = Vec::new();
    for (i, line) in lines {
        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split(delimiter).collect();
        if fields.len() != columns.len() {
            return Err(PipelineError::parse(
                context,
                format!(
                    "Expected {} fields in line {line_num}, saw {}",
                    columns.len(),
                    fields.len()
                ),
            ));
        }

        let metric = |idx: usize| -> Result<f64, PipelineError> {
            let raw = fields[idx].trim();
            raw.parse().map_err(|_| {
                PipelineError::parse(
                    context,
                    format!("Invalid {} on line {line_num}: '{raw}'", columns[idx]),
                )
            })
        };

        bins.push(BinQuality::new(
            fields[name_idx].trim(),
            metric(completeness_idx)?,
            metric(contamination_idx)?,
        ));
    }

    Ok(bins)
}
