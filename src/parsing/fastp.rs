//! Extract the read summary from a fastp JSON report.
//!
//! Only four values are used:
//!
//! | Path | Meaning |
//! |------|---------|
//! | `summary.before_filtering.total_reads` | reads in |
//! | `summary.after_filtering.total_reads` | reads out |
//! | `summary.after_filtering.q30_rate` | Q30 fraction after filtering |
//! | `summary.after_filtering.gc_content` | GC fraction after filtering |

use std::path::Path;

use serde_json::Value;

use crate::core::error::PipelineError;
use crate::core::qc::QcSummary;

const CONTEXT: &str = "QC JSON";

/// Read a fastp report from disk.
///
/// # Errors
///
/// Returns `PipelineError::NotFound` if the file does not exist,
/// `PipelineError::Parse` for invalid JSON, non-UTF-8 content or wrongly
/// typed fields, and
/// `PipelineError::MissingField` if a required key is absent.
pub fn parse_fastp_file(path: &Path) -> Result<QcSummary, PipelineError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| PipelineError::from_open("File", path, e))?;
    parse_fastp_json(&content)
}

/// Parse fastp report text.
///
/// # Errors
///
/// See [`parse_fastp_file`].
pub fn parse_fastp_json(text: &str) -> Result<QcSummary, PipelineError> {
    let report: Value = serde_json::from_str(text).map_err(|e| PipelineError::parse(CONTEXT, e))?;

    let reads_before = lookup(&report, &["summary", "before_filtering", "total_reads"])?;
    let reads_after = lookup(&report, &["summary", "after_filtering", "total_reads"])?;
    let q30_rate = lookup(&report, &["summary", "after_filtering", "q30_rate"])?;
    let gc_content = lookup(&report, &["summary", "after_filtering", "gc_content"])?;

    Ok(QcSummary {
        reads_before: as_count(reads_before, "total_reads")?,
        reads_after: as_count(reads_after, "total_reads")?,
        q30_rate: as_fraction(q30_rate, "q30_rate")?,
        gc_content: as_fraction(gc_content, "gc_content")?,
    })
}

/// Walk nested objects, reporting the first key that is absent
fn lookup<'a>(root: &'a Value, path: &[&str]) -> Result<&'a Value, PipelineError> {
    let mut node = root;
    for (depth, key) in path.iter().enumerate() {
        node = match node {
            Value::Object(map) => map
                .get(*key)
                .ok_or_else(|| PipelineError::MissingField((*key).to_string()))?,
            other => {
                return Err(PipelineError::parse(
                    CONTEXT,
                    format!(
                        "expected an object at '{}', found {}",
                        path[..depth].join("."),
                        type_name(other)
                    ),
                ))
            }
        };
    }
    Ok(node)
}

fn as_count(value: &Value, key: &str) -> Result<u64, PipelineError> {
    value.as_u64().ok_or_else(|| {
        PipelineError::parse(
            CONTEXT,
            format!("'{key}' must be a non-negative integer, found {value}"),
        )
    })
}

fn as_fraction(value: &Value, key: &str) -> Result<f64, PipelineError> {
    value
        .as_f64()
        .ok_or_else(|| PipelineError::parse(CONTEXT, format!("'{key}' must be a number, found {value}")))
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
