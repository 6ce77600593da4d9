//! # metagen-utils
//!
//! Small, single-pass helpers used between the heavy steps of a metagenomic
//! assembly and binning pipeline.
//!
//! Each helper reads one input file, transforms it record by record, and
//! either writes a filtered copy or prints a short report:
//!
//! - **QC summary**: read counts, Q30 rate and GC content from a fastp JSON report
//! - **Contig filter**: drop assembled contigs shorter than a minimum length
//! - **Bin filter**: select `CheckM2` bins by completeness and contamination
//! - **Config flattener**: turn a nested YAML config into shell `KEY=value` lines
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use metagen_utils::{ContigFilter, ContigFilterStats};
//!
//! let fasta = ">contig_1\nACGTACGT\n>contig_2\nAC\n";
//! let mut kept = Vec::new();
//! let mut stats = ContigFilterStats::new("contigs.fasta", 4);
//!
//! ContigFilter::new(4)
//!     .filter_stream(Cursor::new(fasta), &mut kept, &mut stats)
//!     .unwrap();
//!
//! assert_eq!(stats.kept, 1);
//! assert_eq!(kept, b">contig_1\nACGTACGT\n");
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Data types and the shared error taxonomy
//! - [`parsing`]: Readers for FASTA, fastp JSON, `CheckM2` TSV and YAML
//! - [`processing`]: Filtering, selection and flattening logic
//! - [`cli`]: Command-line interface implementation
//! - [`utils`]: Input validation helpers

pub mod cli;
pub mod core;
pub mod parsing;
pub mod processing;
pub mod utils;

// Re-export commonly used types for convenience
pub use crate::core::bin::{BinQuality, BinThresholds};
pub use crate::core::config::ConfigValue;
pub use crate::core::contig::{ContigFilterStats, SequenceRecord};
pub use crate::core::error::PipelineError;
pub use crate::core::qc::QcSummary;
pub use processing::contigs::ContigFilter;
