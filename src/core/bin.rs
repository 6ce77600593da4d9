use serde::{Deserialize, Serialize};

/// One genome bin from a `CheckM2` quality report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinQuality {
    pub name: String,

    /// Estimated completeness, in percent
    pub completeness: f64,

    /// Estimated contamination, in percent
    pub contamination: f64,
}

/// Thresholds a bin has to beat to count as high quality
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinThresholds {
    /// Completeness must be strictly greater than this
    pub min_completeness: f64,

    /// Contamination must be strictly less than this
    pub max_contamination: f64,
}

impl Default for BinThresholds {
    fn default() -> Self {
        Self {
            min_completeness: 90.0,
            max_contamination: 5.0,
        }
    }
}

impl BinQuality {
    pub fn new(name: impl Into<String>, completeness: f64, contamination: f64) -> Self {
        Self {
            name: name.into(),
            completeness,
            contamination,
        }
    }

    /// Both comparisons are strict; NaN never passes.
    pub fn passes(&self, thresholds: &BinThresholds) -> bool {
        self.completeness > thresholds.min_completeness
            && self.contamination < thresholds.max_contamination
    }
}
