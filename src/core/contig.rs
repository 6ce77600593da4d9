use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single FASTA record as read by the contig filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Full identifier line, including the leading `>`, with trailing
    /// whitespace removed
    pub header: Vec<u8>,

    /// Sequence lines concatenated, independent of the original wrapping
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(header: impl Into<Vec<u8>>, sequence: impl Into<Vec<u8>>) -> Self {
        Self {
            header: header.into(),
            sequence: sequence.into(),
        }
    }

    /// Assembled sequence length
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Record name: the identifier up to the first whitespace, without `>`
    pub fn name(&self) -> String {
        let id = self.header.strip_prefix(b">").unwrap_or(&self.header);
        let end = id
            .iter()
            .position(u8::is_ascii_whitespace)
            .unwrap_or(id.len());
        String::from_utf8_lossy(&id[..end]).to_string()
    }
}

/// Outcome of a contig filtering run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContigFilterStats {
    pub input: PathBuf,
    pub min_length: usize,
    pub kept: u64,
    pub removed: u64,
    /// Records read; always `kept + removed`
    pub total: u64,
}

impl ContigFilterStats {
    pub fn new(input: impl Into<PathBuf>, min_length: usize) -> Self {
        Self {
            input: input.into(),
            min_length,
            kept: 0,
            removed: 0,
            total: 0,
        }
    }

    pub fn record_kept(&mut self) {
        self.kept += 1;
        self.total += 1;
    }

    pub fn record_removed(&mut self) {
        self.removed += 1;
        self.total += 1;
    }
}
