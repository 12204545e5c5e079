//! TF-IDF vectorization over a small, freshly assembled corpus
//!
//! A corpus is a slice of token sequences. One pass derives a sorted
//! vocabulary and a smoothed IDF table, then produces one L2-normalized
//! [`SparseVector`] per document.

mod stats;
mod vector;

pub use stats::{analyze_tfidf_statistics, IdfRange, TfidfStatistics};
pub use vector::SparseVector;

use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

use crate::error::{MathrecError, Result};

/// Term → inverse document frequency, sorted by term
pub type IdfTable = BTreeMap<String, f64>;

/// Term frequency: occurrences of each token divided by the token count.
///
/// Duplicates are counted, so callers may pass token lists that were not
/// deduplicated.
pub fn calculate_tf<S: AsRef<str>>(tokens: &[S]) -> BTreeMap<String, f64> {
    let mut tf: BTreeMap<String, f64> = BTreeMap::new();
    if tokens.is_empty() {
        return tf;
    }

    for token in tokens {
        *tf.entry(token.as_ref().to_string()).or_insert(0.0) += 1.0;
    }

    let total = tokens.len() as f64;
    for count in tf.values_mut() {
        *count /= total;
    }
    tf
}

/// Smoothed IDF for every term of the corpus: `ln(N / (1 + df))`.
///
/// Terms present in every document get a negative weight once N > 1 and
/// df = N; that follows from the smoothing and is kept as is.
pub fn calculate_idf<S: AsRef<str>>(documents: &[Vec<S>]) -> IdfTable {
    let mut idf = IdfTable::new();
    if documents.is_empty() {
        return idf;
    }

    let mut doc_freq: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in documents {
        let unique: HashSet<&str> = doc.iter().map(AsRef::as_ref).collect();
        for term in unique {
            *doc_freq.entry(term).or_insert(0) += 1;
        }
    }

    let total = documents.len() as f64;
    for (term, df) in doc_freq {
        idf.insert(term.to_string(), (total / (1.0 + df as f64)).ln());
    }
    idf
}

/// Un-normalized TF-IDF vector. Terms missing from `idf` weigh zero but are
/// still stored.
pub fn create_tfidf_vector<S: AsRef<str>>(tokens: &[S], idf: &IdfTable) -> SparseVector {
    calculate_tf(tokens)
        .into_iter()
        .map(|(term, tf)| {
            let weight = tf * idf.get(&term).copied().unwrap_or(0.0);
            (term, weight)
        })
        .collect()
}

/// L2-normalize a vector; zero-norm vectors come back unchanged
pub fn normalize_vector(vector: &SparseVector) -> SparseVector {
    vector.normalized()
}

/// Result of vectorizing a whole corpus in one pass
#[derive(Debug, Clone, Default, Serialize)]
pub struct TfidfMatrix {
    pub vectors: Vec<SparseVector>,
    pub vocabulary: Vec<String>,
    pub idf: IdfTable,
}

impl TfidfMatrix {
    pub fn documents_count(&self) -> usize {
        self.vectors.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

/// Fit and transform a corpus in one pass
pub fn build_tfidf_matrix<S: AsRef<str>>(documents: &[Vec<S>]) -> TfidfMatrix {
    if documents.is_empty() {
        return TfidfMatrix::default();
    }

    let idf = calculate_idf(documents);
    let vocabulary = idf.keys().cloned().collect();
    let vectors = documents
        .iter()
        .map(|tokens| create_tfidf_vector(tokens, &idf).normalized())
        .collect();

    TfidfMatrix {
        vectors,
        vocabulary,
        idf,
    }
}

/// Expand a sparse vector over an ordered vocabulary
pub fn sparse_to_dense(vector: &SparseVector, vocabulary: &[String]) -> Vec<f64> {
    vocabulary.iter().map(|term| vector.get(term)).collect()
}

/// Collapse a dense vector back to sparse form, omitting zero entries
pub fn dense_to_sparse(dense: &[f64], vocabulary: &[String]) -> SparseVector {
    vocabulary
        .iter()
        .zip(dense)
        .filter(|(_, &w)| w != 0.0)
        .map(|(term, &w)| (term.as_str(), w))
        .collect()
}

/// A term with its weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermScore {
    pub term: String,
    pub score: f64,
}

/// Highest-weighted terms of a vector, descending; ties keep term order
pub fn top_terms(vector: &SparseVector, n: usize) -> Vec<TermScore> {
    let mut terms: Vec<TermScore> = vector
        .iter()
        .map(|(term, score)| TermScore {
            term: term.to_string(),
            score,
        })
        .collect();
    terms.sort_by(|a, b| b.score.total_cmp(&a.score));
    terms.truncate(n);
    terms
}

/// Weight a term needs to count toward [`term_overlap`] by default
pub const DEFAULT_OVERLAP_THRESHOLD: f64 = 0.1;

/// Jaccard similarity over the terms whose weight is at least `threshold`
pub fn term_overlap(a: &SparseVector, b: &SparseVector, threshold: f64) -> f64 {
    let terms_a: HashSet<&str> = a
        .iter()
        .filter(|(_, w)| *w >= threshold)
        .map(|(t, _)| t)
        .collect();
    let terms_b: HashSet<&str> = b
        .iter()
        .filter(|(_, w)| *w >= threshold)
        .map(|(t, _)| t)
        .collect();

    let union = terms_a.union(&terms_b).count();
    if union == 0 {
        return 0.0;
    }
    terms_a.intersection(&terms_b).count() as f64 / union as f64
}

/// Stateful vectorizer: `fit` learns vocabulary and IDF, `transform` applies
/// them.
///
/// One instance is meant to serve a single query: build it, fit it on the
/// freshly assembled corpus, use it and drop it. `fit` takes `&mut self`, so
/// sharing one instance across threads requires external synchronization.
#[derive(Debug, Clone, Default)]
pub struct TfidfVectorizer {
    idf: IdfTable,
    vocabulary: Vec<String>,
    fitted: bool,
}

impl TfidfVectorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Learn vocabulary and IDF from a corpus, replacing any previous state
    pub fn fit<S: AsRef<str>>(&mut self, documents: &[Vec<S>]) -> &mut Self {
        self.idf = calculate_idf(documents);
        self.vocabulary = self.idf.keys().cloned().collect();
        self.fitted = true;
        self
    }

    /// Vectorize documents against the learned IDF table.
    /// Terms outside the learned vocabulary contribute nothing.
    pub fn transform<S: AsRef<str>>(&self, documents: &[Vec<S>]) -> Result<Vec<SparseVector>> {
        if !self.fitted {
            return Err(MathrecError::NotFitted);
        }
        Ok(documents
            .iter()
            .map(|tokens| create_tfidf_vector(tokens, &self.idf).normalized())
            .collect())
    }

    /// Fit on a corpus and vectorize that same corpus
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[Vec<S>]) -> Vec<SparseVector> {
        self.fit(documents);
        documents
            .iter()
            .map(|tokens| create_tfidf_vector(tokens, &self.idf).normalized())
            .collect()
    }

    /// Vectorize a single token sequence against the learned IDF table
    pub fn transform_one<S: AsRef<str>>(&self, tokens: &[S]) -> Result<SparseVector> {
        if !self.fitted {
            return Err(MathrecError::NotFitted);
        }
        Ok(create_tfidf_vector(tokens, &self.idf).normalized())
    }

    pub fn is_fitted(&self) -> bool {
        self.fitted
    }

    /// Learned vocabulary, sorted
    pub fn vocabulary(&self) -> &[String] {
        &self.vocabulary
    }

    /// Learned IDF table
    pub fn idf(&self) -> &IdfTable {
        &self.idf
    }
}
