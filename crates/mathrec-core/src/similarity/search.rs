//! Matrix building, nearest-neighbor search and clustering

use std::collections::HashSet;

use super::{Metric, SimilarityMatrix, SimilarityResult};
use crate::error::{MathrecError, Result};
use crate::tfidf::SparseVector;

/// Full symmetric matrix; only the upper triangle is computed
pub fn build_similarity_matrix(vectors: &[SparseVector], metric: Metric) -> SimilarityMatrix {
    let n = vectors.len();
    let mut rows = vec![vec![0.0; n]; n];

    for i in 0..n {
        rows[i][i] = 1.0;
        for j in (i + 1)..n {
            let score = metric.score(&vectors[i], &vectors[j]);
            rows[i][j] = score;
            rows[j][i] = score;
        }
    }

    SimilarityMatrix::from(rows)
}

fn rank(mut results: Vec<SimilarityResult>, top_n: usize) -> Vec<SimilarityResult> {
    results.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    results.truncate(top_n);
    results
}

/// Top `top_n` neighbors of `vectors[target]`, most similar first.
/// The target itself is never returned.
pub fn find_most_similar(
    vectors: &[SparseVector],
    target: usize,
    top_n: usize,
    metric: Metric,
) -> Result<Vec<SimilarityResult>> {
    let target_vector = vectors
        .get(target)
        .ok_or_else(|| MathrecError::index_out_of_range(target, vectors.len()))?;

    let results = vectors
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != target)
        .map(|(index, v)| SimilarityResult {
            index,
            similarity: metric.score(target_vector, v),
        })
        .collect();

    Ok(rank(results, top_n))
}

/// Top `top_n` corpus vectors for a query that is not part of the corpus
pub fn find_similar_to_query(
    vectors: &[SparseVector],
    query: &SparseVector,
    top_n: usize,
    metric: Metric,
) -> Vec<SimilarityResult> {
    let results = vectors
        .iter()
        .enumerate()
        .map(|(index, v)| SimilarityResult {
            index,
            similarity: metric.score(query, v),
        })
        .collect();

    rank(results, top_n)
}

/// Seed-based greedy clustering.
///
/// Each unvisited vector seeds a cluster that absorbs every later unvisited
/// vector scoring at least `threshold` against the seed. Members are only
/// compared to the seed, never to each other.
pub fn cluster_by_similarity(
    vectors: &[SparseVector],
    threshold: f64,
    metric: Metric,
) -> Vec<Vec<usize>> {
    let mut clusters = Vec::new();
    let mut visited = HashSet::new();

    for i in 0..vectors.len() {
        if !visited.insert(i) {
            continue;
        }

        let mut cluster = vec![i];
        for j in (i + 1)..vectors.len() {
            if visited.contains(&j) {
                continue;
            }
            if metric.score(&vectors[i], &vectors[j]) >= threshold {
                cluster.push(j);
                visited.insert(j);
            }
        }
        clusters.push(cluster);
    }

    clusters
}
