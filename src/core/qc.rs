use serde::{Deserialize, Serialize};

/// Read-level summary of a fastp run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QcSummary {
    pub reads_before: u64,
    pub reads_after: u64,

    /// Fraction (0-1) of post-filter bases at Q30 or above
    pub q30_rate: f64,

    /// Fraction (0-1) of post-filter bases that are G or C
    pub gc_content: f64,
}

impl QcSummary {
    pub fn q30_percent(&self) -> f64 {
        self.q30_rate * 100.0
    }

    pub fn gc_percent(&self) -> f64 {
        self.gc_content * 100.0
    }
}
