//! Length filtering of assembled contigs.

use std::fs::File;
use std::io::{BufRead, BufWriter, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use tracing::debug;

use crate::core::contig::{ContigFilterStats, SequenceRecord};
use crate::core::error::PipelineError;
use crate::parsing::fasta::{is_gzipped, open_fasta, FastaRecords};

/// Default minimum contig length, in bases
pub const DEFAULT_MIN_LENGTH: usize = 200;

/// Keeps records whose assembled sequence is at least `min_length` long
#[derive(Debug, Clone, Copy)]
pub struct ContigFilter {
    pub min_length: usize,
}

impl Default for ContigFilter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl ContigFilter {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }

    pub fn keeps(&self, record: &SequenceRecord) -> bool {
        record.len() >= self.min_length
    }

    /// Stream records from `reader`, writing survivors to `writer`.
    ///
    /// Each kept record is written as its identifier line followed by the
    /// whole sequence on a single line.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::Io` if reading or writing fails. Records
    /// already written are left in `writer`.
    pub fn filter_stream<R: BufRead, W: Write>(
        &self,
        reader: R,
        writer: &mut W,
        stats: &mut ContigFilterStats,
    ) -> Result<(), PipelineError> {
        for result in FastaRecords::new(reader) {
            let record = result.map_err(PipelineError::io("reading contigs"))?;

            if self.keeps(&record) {
                write_record(writer, &record).map_err(PipelineError::io("writing contigs"))?;
                stats.record_kept();
            } else {
                debug!("Removing {} ({} bp)", record.name(), record.len());
                stats.record_removed();
            }
        }
        Ok(())
    }

    /// Filter the FASTA file at `input` into `output`.
    ///
    /// The input is opened before the output is created, so a missing input
    /// never leaves an empty output file behind. Output paths ending in `.gz`
    /// are gzip compressed.
    ///
    /// # Errors
    ///
    /// Returns `PipelineError::NotFound` if the input does not exist and
    /// `PipelineError::Io` for any other read or write failure.
    pub fn filter_file(&self, input: &Path, output: &Path) -> Result<ContigFilterStats, PipelineError> {
        let reader = open_fasta(input).map_err(|e| PipelineError::from_open("Input file", input, e))?;
        let file = File::create(output).map_err(PipelineError::io(format!(
            "creating {}",
            output.display()
        )))?;

        let mut stats = ContigFilterStats::new(input, self.min_length);
        let finish_err = || PipelineError::io(format!("finishing {}", output.display()));

        if is_gzipped(output) {
            let mut writer = GzEncoder::new(BufWriter::new(file), Compression::default());
            self.filter_stream(reader, &mut writer, &mut stats)?;
            writer
                .finish()
                .and_then(|mut inner| inner.flush())
                .map_err(finish_err())?;
        } else {
            let mut writer = BufWriter::new(file);
            self.filter_stream(reader, &mut writer, &mut stats)?;
            writer.flush().map_err(finish_err())?;
        }

        debug!(
            "Kept {} of {} contigs from {}",
            stats.kept,
            stats.total,
            input.display()
        );
        Ok(stats)
    }
}

fn write_record<W: Write>(writer: &mut W, record: &SequenceRecord) -> std::io::Result<()> {
    writer.write_all(&record.header)?;
    writer.write_all(b"\n")?;
    writer.write_all(&record.sequence)?;
    writer.write_all(b"\n")
}
