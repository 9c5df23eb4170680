//! Small numeric helpers shared by the aggregation and outlier stages.

use statrs::statistics::Statistics;

/// Percentile of an ascending-sorted slice using linear interpolation
/// between the closest ranks. Empty input yields 0.0.
pub fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let rank = (p / 100.0) * (sorted.len() - 1) as f64;
    let lower = rank.floor() as usize;
    let upper = rank.ceil() as usize;
    let frac = rank - lower as f64;

    if upper >= sorted.len() {
        sorted[sorted.len() - 1]
    } else {
        sorted[lower] * (1.0 - frac) + sorted[upper] * frac
    }
}

/// Sort a copy of `values` ascending. NaN never reaches here; durations are
/// sanitized by the enricher.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_by(|a, b| a.total_cmp(b));
    out
}

pub fn median(values: &[f64]) -> f64 {
    percentile(&sorted(values), 50.0)
}

/// Arithmetic mean, 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().mean()
    }
}

/// Population standard deviation, 0.0 for empty input.
pub fn population_std(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().population_std_dev()
    }
}

/// Percentage `part / whole * 100`, 0.0 when `whole` is zero.
pub fn rate(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
