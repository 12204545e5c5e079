//! Sparse term-weight vectors

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sparse vector mapping term → weight.
///
/// Only terms present in the source document are stored; absent terms are
/// implicitly zero. Terms iterate in sorted order so every summation over a
/// vector is reproducible bit for bit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector(BTreeMap<String, f64>);

impl SparseVector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weight of a term, zero when absent
    pub fn get(&self, term: &str) -> f64 {
        self.0.get(term).copied().unwrap_or(0.0)
    }

    /// Weight of a term if it is stored
    pub fn weight(&self, term: &str) -> Option<f64> {
        self.0.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.0.contains_key(term)
    }

    pub fn insert(&mut self, term: impl Into<String>, weight: f64) {
        self.0.insert(term.into(), weight);
    }

    /// Number of stored terms
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(t, w)| (t.as_str(), *w))
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Euclidean (L2) norm
    pub fn magnitude(&self) -> f64 {
        self.0.values().map(|w| w * w).sum::<f64>().sqrt()
    }

    /// Copy of this vector with every weight divided by the L2 norm.
    /// A zero-norm vector is returned unchanged.
    pub fn normalized(&self) -> SparseVector {
        let norm = self.magnitude();
        if norm == 0.0 {
            return self.clone();
        }
        SparseVector(
            self.0
                .iter()
                .map(|(t, w)| (t.clone(), w / norm))
                .collect(),
        )
    }
}

impl<K: Into<String>> FromIterator<(K, f64)> for SparseVector {
    fn from_iter<I: IntoIterator<Item = (K, f64)>>(iter: I) -> Self {
        SparseVector(iter.into_iter().map(|(k, w)| (k.into(), w)).collect())
    }
}

impl From<BTreeMap<String, f64>> for SparseVector {
    fn from(map: BTreeMap<String, f64>) -> Self {
        SparseVector(map)
    }
}
