//! The per-record logic behind each command.
//!
//! Everything here takes already-parsed input and explicit parameters; file
//! access and process exit stay in [`crate::cli`].
//!
//! - [`contigs`]: length filter for FASTA records
//! - [`bins`]: threshold selection and table rendering for `CheckM2` bins
//! - [`config`]: flattening of a configuration tree into shell assignments

pub mod bins;
pub mod config;
pub mod contigs;
