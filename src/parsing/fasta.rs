//! Streaming FASTA reader.
//!
//! Records are assembled line by line: an identifier line starts a record,
//! every following line up to the next identifier (or end of input) is
//! appended to its sequence. Only one record is held in memory at a time.
//!
//! Supported inputs:
//! - plain text (`.fa`, `.fasta`, `.fna`, or anything else)
//! - gzip/bgzip compressed (`.gz`, `.bgz`)

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use tracing::warn;

use crate::core::contig::SequenceRecord;

/// Marker that starts an identifier line
pub const RECORD_MARKER: u8 = b'>';

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a FASTA file for buffered reading, decompressing if needed.
///
/// # Errors
///
/// Returns the `io::Error` from opening the file.
pub fn open_fasta(path: &Path) -> std::io::Result<Box<dyn BufRead>> {
    let file = File::open(path)?;
    let inner: Box<dyn Read> = if is_gzipped(path) {
        Box::new(MultiGzDecoder::new(file))
    } else {
        Box::new(file)
    };
    Ok(Box::new(BufReader::new(inner)))
}

/// Iterator over the records of a FASTA stream
pub struct FastaRecords<R> {
    reader: R,
    line: Vec<u8>,
    pending: Option<SequenceRecord>,
    orphan_lines: usize,
    done: bool,
}

impl<R: BufRead> FastaRecords<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: Vec::new(),
            pending: None,
            orphan_lines: 0,
            done: false,
        }
    }

    /// Non-empty lines seen before the first identifier line
    pub fn orphan_lines(&self) -> usize {
        self.orphan_lines
    }

    fn next_record(&mut self) -> std::io::Result<Option<SequenceRecord>> {
        loop {
            self.line.clear();
            if self.reader.read_until(b'\n', &mut self.line)? == 0 {
                self.done = true;
                if self.orphan_lines > 0 {
                    warn!(
                        "Dropped {} sequence line(s) found before the first record",
                        self.orphan_lines
                    );
                }
                return Ok(self.pending.take());
            }

            let line = trim_end(&self.line);
            if line.first() == Some(&RECORD_MARKER) {
                let next = SequenceRecord::new(line, Vec::new());
                if let Some(finished) = self.pending.replace(next) {
                    return Ok(Some(finished));
                }
            } else if let Some(record) = self.pending.as_mut() {
                record.sequence.extend_from_slice(line);
            } else if !line.is_empty() {
                self.orphan_lines += 1;
            }
        }
    }
}

impl<R: BufRead> Iterator for FastaRecords<R> {
    type Item = std::io::Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.next_record() {
            Ok(record) => record.map(Ok),
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Strip trailing ASCII whitespace, including `\r` from CRLF files
fn trim_end(line: &[u8]) -> &[u8] {
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(0, |i| i + 1);
    &line[..end]
}
