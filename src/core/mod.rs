//! Core data types shared by the pipeline utilities.
//!
//! - [`SequenceRecord`]: a FASTA record with its identifier line and assembled sequence
//! - [`ContigFilterStats`]: kept/removed counts reported by the contig filter
//! - [`BinQuality`]: one row of a `CheckM2` quality report
//! - [`QcSummary`]: the read-level summary pulled out of a fastp report
//! - [`ConfigValue`]: a node of a parsed YAML configuration tree
//! - [`PipelineError`]: the error taxonomy every command reports through
//!
//! All of these are built from a single input file and dropped when the
//! process exits.

pub mod bin;
pub mod config;
pub mod contig;
pub mod error;
pub mod qc;
