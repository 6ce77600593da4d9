//! Parsers for the pipeline's input formats.
//!
//! - **FASTA** (`fasta`): streaming record reader, plain or gzip compressed
//! - **fastp JSON** (`fastp`): read counts, Q30 rate and GC content
//! - **CheckM2 TSV** (`tsv`): per-bin completeness and contamination
//! - **YAML** (`yaml`): nested configuration documents
//!
//! ## Example
//!
//! ```rust
//! use metagen_utils::parsing::tsv::parse_quality_report_text;
//!
//! let report = "Name\tCompleteness\tContamination\nbin.1\t95.0\t2.0\n";
//! let bins = parse_quality_report_text(report, '\t').unwrap();
//! assert_eq!(bins[0].name, "bin.1");
//! ```

pub mod fasta;
pub mod fastp;
pub mod tsv;
pub mod yaml;
