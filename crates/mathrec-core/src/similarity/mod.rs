//! Similarity engine for ranking and grouping vectorized documents

mod metrics;
mod search;
mod stats;

pub use metrics::{
    cosine_similarity, distance_to_similarity, dot_product, euclidean_distance,
    jaccard_similarity, magnitude, manhattan_distance,
};
pub use search::{
    build_similarity_matrix, cluster_by_similarity, find_most_similar, find_similar_to_query,
};
pub use stats::{analyze_similarity_distribution, DistributionStats};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::error::{MathrecError, Result};
use crate::tfidf::SparseVector;

/// Similarity metric
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Metric {
    #[default]
    Cosine,
    /// Set overlap of terms weighted strictly above `threshold`
    Jaccard { threshold: f64 },
    /// `1 / (1 + L2 distance)`
    Euclidean,
    /// `1 / (1 + L1 distance)`
    Manhattan,
}

impl Metric {
    /// Score two vectors. Higher is more similar.
    pub fn score(&self, a: &SparseVector, b: &SparseVector) -> f64 {
        match self {
            Metric::Cosine => cosine_similarity(a, b),
            Metric::Jaccard { threshold } => jaccard_similarity(a, b, *threshold),
            Metric::Euclidean => distance_to_similarity(euclidean_distance(a, b)),
            Metric::Manhattan => distance_to_similarity(manhattan_distance(a, b)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Metric::Cosine => "cosine",
            Metric::Jaccard { .. } => "jaccard",
            Metric::Euclidean => "euclidean",
            Metric::Manhattan => "manhattan",
        }
    }
}

impl FromStr for Metric {
    type Err = MathrecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "cosine" => Ok(Metric::Cosine),
            "jaccard" => Ok(Metric::Jaccard { threshold: 0.0 }),
            "euclidean" => Ok(Metric::Euclidean),
            "manhattan" => Ok(Metric::Manhattan),
            _ => Err(MathrecError::UnknownMetric(s.to_string())),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A neighbor of a query, referenced by its position in the corpus
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub index: usize,
    pub similarity: f64,
}

/// Square symmetric matrix of pairwise scores with a unit diagonal
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SimilarityMatrix(Vec<Vec<f64>>);

impl SimilarityMatrix {
    /// Number of rows (and columns)
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        self.0.get(i).and_then(|row| row.get(j)).copied()
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.0
    }
}

impl From<Vec<Vec<f64>>> for SimilarityMatrix {
    fn from(rows: Vec<Vec<f64>>) -> Self {
        SimilarityMatrix(rows)
    }
}

/// Holds one vector collection and answers queries against it with a fixed
/// metric. Nothing is cached; the matrix is rebuilt on every request.
#[derive(Debug, Clone, Default)]
pub struct SimilarityCalculator {
    metric: Metric,
    vectors: Option<Vec<SparseVector>>,
}

impl SimilarityCalculator {
    pub fn new(metric: Metric) -> Self {
        SimilarityCalculator {
            metric,
            vectors: None,
        }
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Replace the vector collection
    pub fn set_vectors(&mut self, vectors: Vec<SparseVector>) {
        self.vectors = Some(vectors);
    }

    fn vectors(&self) -> Result<&[SparseVector]> {
        self.vectors.as_deref().ok_or(MathrecError::VectorsNotSet)
    }

    /// Score between two members; a member against itself is exactly 1.0
    pub fn similarity(&self, i: usize, j: usize) -> Result<f64> {
        let vectors = self.vectors()?;
        let a = vectors
            .get(i)
            .ok_or_else(|| MathrecError::index_out_of_range(i, vectors.len()))?;
        let b = vectors
            .get(j)
            .ok_or_else(|| MathrecError::index_out_of_range(j, vectors.len()))?;

        if i == j {
            return Ok(1.0);
        }
        Ok(self.metric.score(a, b))
    }

    pub fn get_matrix(&self) -> Result<SimilarityMatrix> {
        Ok(build_similarity_matrix(self.vectors()?, self.metric))
    }

    pub fn get_most_similar(&self, target: usize, top_n: usize) -> Result<Vec<SimilarityResult>> {
        find_most_similar(self.vectors()?, target, top_n, self.metric)
    }

    pub fn similar_to_query(
        &self,
        query: &SparseVector,
        top_n: usize,
    ) -> Result<Vec<SimilarityResult>> {
        Ok(find_similar_to_query(
            self.vectors()?,
            query,
            top_n,
            self.metric,
        ))
    }

    /// Seed-based clusters of the collection
    pub fn clusters(&self, threshold: f64) -> Result<Vec<Vec<usize>>> {
        Ok(cluster_by_similarity(
            self.vectors()?,
            threshold,
            self.metric,
        ))
    }
}
