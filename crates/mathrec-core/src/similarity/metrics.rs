//! Pairwise metrics over sparse vectors

use std::collections::BTreeSet;

use crate::tfidf::SparseVector;

/// Dot product, iterating the vector with fewer stored terms
pub fn dot_product(a: &SparseVector, b: &SparseVector) -> f64 {
    let (smaller, larger) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    smaller
        .iter()
        .filter_map(|(term, w)| larger.weight(term).map(|other| w * other))
        .sum()
}

/// Euclidean (L2) norm
pub fn magnitude(vector: &SparseVector) -> f64 {
    vector.magnitude()
}

/// Cosine of the angle between two vectors.
///
/// Returns 0.0 when either vector is empty or has zero norm.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let norm_a = a.magnitude();
    let norm_b = b.magnitude();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product(a, b) / (norm_a * norm_b)
}

/// Jaccard index over the terms whose weight is strictly above `threshold`
pub fn jaccard_similarity(a: &SparseVector, b: &SparseVector, threshold: f64) -> f64 {
    let terms_a: BTreeSet<&str> = a
        .iter()
        .filter(|(_, w)| *w > threshold)
        .map(|(t, _)| t)
        .collect();
    let terms_b: BTreeSet<&str> = b
        .iter()
        .filter(|(_, w)| *w > threshold)
        .map(|(t, _)| t)
        .collect();

    let union = terms_a.union(&terms_b).count();
    if union == 0 {
        return 0.0;
    }
    terms_a.intersection(&terms_b).count() as f64 / union as f64
}

fn union_terms<'a>(a: &'a SparseVector, b: &'a SparseVector) -> BTreeSet<&'a str> {
    a.terms().chain(b.terms()).collect()
}

/// L2 distance over the union of terms, absent terms counted as zero
pub fn euclidean_distance(a: &SparseVector, b: &SparseVector) -> f64 {
    union_terms(a, b)
        .into_iter()
        .map(|term| {
            let diff = a.get(term) - b.get(term);
            diff * diff
        })
        .sum::<f64>()
        .sqrt()
}

/// L1 distance over the union of terms, absent terms counted as zero
pub fn manhattan_distance(a: &SparseVector, b: &SparseVector) -> f64 {
    union_terms(a, b)
        .into_iter()
        .map(|term| (a.get(term) - b.get(term)).abs())
        .sum()
}

/// Map a non-negative distance into (0, 1]
pub fn distance_to_similarity(distance: f64) -> f64 {
    1.0 / (1.0 + distance)
}
