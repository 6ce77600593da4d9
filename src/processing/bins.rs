//! Selection of high-quality genome bins.

use serde::Serialize;

use crate::core::bin::{BinQuality, BinThresholds};

/// Bins that passed the thresholds, plus how many were considered
#[derive(Debug, Clone, Serialize)]
pub struct BinSelection {
    pub thresholds: BinThresholds,
    pub total: usize,
    pub selected: Vec<BinQuality>,
}

/// Keep bins passing both thresholds, in input order.
pub fn select_bins(bins: Vec<BinQuality>, thresholds: BinThresholds) -> BinSelection {
    let total = bins.len();
    let selected = bins
        .into_iter()
        .filter(|bin| bin.passes(&thresholds))
        .collect();

    BinSelection {
        thresholds,
        total,
        selected,
    }
}

/// Render bins as a right-aligned text table with `Name`, `Completeness`
/// and `Contamination` columns.
///
/// Each numeric column uses one precision for all of its rows: the fewest
/// decimals (at least one, at most six) that show every value.
pub fn format_bin_table(bins: &[BinQuality]) -> String {
    let headers = ["Name", "Completeness", "Contamination"];
    if bins.is_empty() {
        return format!("Empty DataFrame\nColumns: [{}]\nIndex: []", headers.join(", "));
    }

    let completeness = format_column(bins.iter().map(|b| b.completeness));
    let contamination = format_column(bins.iter().map(|b| b.contamination));
    let names: Vec<String> = bins.iter().map(|b| b.name.clone()).collect();
    let columns = [names, completeness, contamination];

    let widths: Vec<usize> = headers
        .iter()
        .zip(&columns)
        .map(|(h, col)| col.iter().map(String::len).chain([h.len()]).max().unwrap_or(0))
        .collect();

    let mut lines = Vec::with_capacity(bins.len() + 1);
    lines.push(join_row(headers.iter().copied(), &widths));
    for row in 0..bins.len() {
        lines.push(join_row(columns.iter().map(|c| c[row].as_str()), &widths));
    }
    lines.join("\n")
}

fn join_row<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:>width$}"))
        .collect::<Vec<_>>()
        .join("  ")
}

fn format_column(values: impl Iterator<Item = f64> + Clone) -> Vec<String> {
    let decimals = values.clone().map(decimals_needed).max().unwrap_or(1);
    values.map(|v| format!("{v:.decimals$}")).collect()
}

fn decimals_needed(value: f64) -> usize {
    if !value.is_finite() {
        return 1;
    }
    (1..=6)
        .find(|&d| {
            let shown: f64 = format!("{value:.d$}").parse().unwrap_or(f64::NAN);
            (shown - value).abs() <= f64::EPSILON * value.abs().max(1.0)
        })
        .unwrap_or(6)
}
