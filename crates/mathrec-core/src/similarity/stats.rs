//! Diagnostics over a similarity matrix

use serde::Serialize;

use super::SimilarityMatrix;

/// Summary of the off-diagonal similarities of a matrix
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DistributionStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub median: f64,
    pub q1: f64,
    pub q3: f64,
    /// Population standard deviation
    pub std: f64,
}

/// Describe the upper triangle of a matrix, diagonal excluded.
///
/// Percentiles pick the element at `floor(len * p)` of the ascending list.
/// A matrix with fewer than two rows yields all zeros.
pub fn analyze_similarity_distribution(matrix: &SimilarityMatrix) -> DistributionStats {
    let mut values: Vec<f64> = matrix
        .rows()
        .iter()
        .enumerate()
        .flat_map(|(i, row)| row.iter().skip(i + 1).copied())
        .collect();

    if values.is_empty() {
        return DistributionStats::default();
    }

    values.sort_by(f64::total_cmp);

    let len = values.len();
    let at = |p: f64| values[((len as f64 * p).floor() as usize).min(len - 1)];
    let mean = values.iter().sum::<f64>() / len as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / len as f64;

    DistributionStats {
        count: len,
        min: values[0],
        max: values[len - 1],
        mean,
        median: values[len / 2],
        q1: at(0.25),
        q3: at(0.75),
        std: variance.sqrt(),
    }
}
