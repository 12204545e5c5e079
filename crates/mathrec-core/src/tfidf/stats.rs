//! Corpus-level diagnostics for a TF-IDF matrix

use serde::Serialize;

use super::{TermScore, TfidfMatrix};

const REPORTED_TERMS: usize = 10;

/// Spread of the IDF table
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdfRange {
    pub min: f64,
    pub max: f64,
    pub avg: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TfidfStatistics {
    pub vocabulary_size: usize,
    pub documents_count: usize,
    pub avg_terms_per_document: f64,
    /// Highest mean non-zero weight first
    pub most_discriminative_terms: Vec<TermScore>,
    /// Tail of the same ranking, lowest last
    pub least_discriminative_terms: Vec<TermScore>,
    pub idf_range: IdfRange,
}

/// Summarize a matrix. Each vocabulary term is scored by its mean weight
/// over the documents where that weight is non-zero.
pub fn analyze_tfidf_statistics(matrix: &TfidfMatrix) -> TfidfStatistics {
    if matrix.vectors.is_empty() {
        return TfidfStatistics::default();
    }

    let mut ranked: Vec<TermScore> = matrix
        .vocabulary
        .iter()
        .map(|term| {
            let (sum, count) = matrix
                .vectors
                .iter()
                .map(|v| v.get(term))
                .filter(|w| *w != 0.0)
                .fold((0.0, 0usize), |(s, c), w| (s + w, c + 1));
            let score = if count > 0 { sum / count as f64 } else { 0.0 };
            TermScore {
                term: term.clone(),
                score,
            }
        })
        .collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

    let total_terms: usize = matrix.vectors.iter().map(|v| v.len()).sum();
    let tail_start = ranked.len().saturating_sub(REPORTED_TERMS);

    TfidfStatistics {
        vocabulary_size: matrix.vocabulary.len(),
        documents_count: matrix.vectors.len(),
        avg_terms_per_document: total_terms as f64 / matrix.vectors.len() as f64,
        most_discriminative_terms: ranked.iter().take(REPORTED_TERMS).cloned().collect(),
        least_discriminative_terms: ranked[tail_start..].to_vec(),
        idf_range: idf_range(matrix),
    }
}

fn idf_range(matrix: &TfidfMatrix) -> IdfRange {
    if matrix.idf.is_empty() {
        return IdfRange::default();
    }
    let values = || matrix.idf.values().copied();
    IdfRange {
        min: values().fold(f64::INFINITY, f64::min),
        max: values().fold(f64::NEG_INFINITY, f64::max),
        avg: values().sum::<f64>() / matrix.idf.len() as f64,
    }
}
