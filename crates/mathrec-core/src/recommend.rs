//! "Next problem" recommendations over a problem bank
//!
//! Each call assembles a fresh corpus, fits a new vectorizer on it and ranks
//! neighbors of the query document. Nothing is reused across calls.
//!
//! Plain ranking orders by similarity. The difficulty-aware variants rank
//! the same candidates by a blended score, see [`crate::difficulty`].

use std::collections::HashSet;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::debug;

use crate::config::EngineConfig;
use crate::difficulty::{
    conversation_bonus, progression_score, Difficulty, StepScale, CONVERSATION_MIN_SCORE,
};
use crate::error::Result;
use crate::problems::ProblemBank;
use crate::similarity::{Metric, SimilarityCalculator, SimilarityResult};
use crate::text::Normalizer;
use crate::tfidf::{build_tfidf_matrix, TfidfMatrix, TfidfVectorizer};
use crate::trace_time;

/// A suggested problem
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub id: String,
    /// Position in the bank
    pub index: usize,
    /// Score under the active metric; 0.0 for sequential fallbacks
    pub similarity: f64,
    /// Ranking score: the similarity itself, or its difficulty-aware blend
    pub score: f64,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone)]
pub struct Recommender {
    normalizer: Normalizer,
    metric: Metric,
    top_n: usize,
    min_similarity: f64,
}

impl Default for Recommender {
    fn default() -> Self {
        Recommender {
            normalizer: Normalizer::builtin().clone(),
            metric: Metric::Cosine,
            top_n: 3,
            min_similarity: 0.1,
        }
    }
}

impl Recommender {
    pub fn from_config(config: &EngineConfig) -> Result<Self> {
        Ok(Recommender {
            normalizer: config.normalizer()?,
            metric: config.metric()?,
            top_n: config.top_n,
            min_similarity: config.min_similarity,
        })
    }

    pub fn with_metric(mut self, metric: Metric) -> Self {
        self.metric = metric;
        self
    }

    pub fn with_top_n(mut self, top_n: usize) -> Self {
        self.top_n = top_n;
        self
    }

    pub fn with_min_similarity(mut self, min_similarity: f64) -> Self {
        self.min_similarity = min_similarity;
        self
    }

    pub fn metric(&self) -> Metric {
        self.metric
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    fn tokenize_bank(&self, bank: &ProblemBank) -> Vec<Vec<String>> {
        bank.statements()
            .map(|statement| self.normalizer.normalize(statement))
            .collect()
    }

    /// `text` as document 0 followed by the bank
    fn text_corpus(&self, bank: &ProblemBank, text: &str) -> Vec<Vec<String>> {
        let mut corpus = Vec::with_capacity(bank.len() + 1);
        corpus.push(self.normalizer.normalize(text));
        corpus.extend(self.tokenize_bank(bank));
        corpus
    }

    /// Normalize and vectorize every statement of the bank in bank order
    pub fn vectorize_bank(&self, bank: &ProblemBank) -> TfidfMatrix {
        let start = Instant::now();
        let matrix = build_tfidf_matrix(&self.tokenize_bank(bank));
        trace_time!(
            start,
            "vectorize_bank",
            documents = matrix.documents_count(),
            vocabulary = matrix.vocabulary_size()
        );
        matrix
    }

    /// Rank every other document of `corpus` against `corpus[query]`
    fn rank_corpus(&self, corpus: &[Vec<String>], query: usize) -> Result<Vec<SimilarityResult>> {
        let start = Instant::now();
        let mut vectorizer = TfidfVectorizer::new();
        let vectors = vectorizer.fit_transform(corpus);
        debug!(
            documents = corpus.len(),
            vocabulary = vectorizer.vocabulary().len(),
            elapsed = ?start.elapsed(),
            "fit_transform"
        );

        let mut calculator = SimilarityCalculator::new(self.metric);
        calculator.set_vectors(vectors);
        let ranked = calculator.get_most_similar(query, corpus.len())?;
        debug!(metric = %self.metric, candidates = ranked.len(), elapsed = ?start.elapsed(), "rank");
        Ok(ranked)
    }

    /// Keep results above the threshold that are neither completed nor the
    /// current problem, in ranked order. `offset` is how many synthetic
    /// documents precede the bank in the corpus.
    fn candidates(
        &self,
        bank: &ProblemBank,
        ranked: Vec<SimilarityResult>,
        offset: usize,
        current: Option<&str>,
        completed: &HashSet<String>,
    ) -> Vec<Recommendation> {
        let problems = bank.problems();
        ranked
            .into_iter()
            .filter(|r| r.similarity > self.min_similarity)
            .filter_map(|r| {
                let index = r.index.checked_sub(offset)?;
                let problem = problems.get(index)?;
                if completed.contains(&problem.id) || current == Some(problem.id.as_str()) {
                    return None;
                }
                Some(Recommendation {
                    id: problem.id.clone(),
                    index,
                    similarity: r.similarity,
                    score: r.similarity,
                    difficulty: StepScale::PROGRESSION.classify(problem.step_count()),
                })
            })
            .collect()
    }

    /// Truncate to `top_n`, re-sorting by score first when it was changed
    fn finish(&self, mut selected: Vec<Recommendation>, rescored: bool) -> Vec<Recommendation> {
        if rescored {
            selected.sort_by(|a, b| b.score.total_cmp(&a.score));
        }
        selected.truncate(self.top_n);
        debug!(
            selected = selected.len(),
            min_similarity = self.min_similarity,
            rescored,
            "select"
        );
        selected
    }

    /// Problems most similar to the statement of `current_id`
    pub fn similar_to_problem(
        &self,
        bank: &ProblemBank,
        current_id: &str,
        completed: &HashSet<String>,
    ) -> Result<Vec<Recommendation>> {
        let query = bank.require(current_id)?;
        let corpus = self.tokenize_bank(bank);
        let ranked = self.rank_corpus(&corpus, query)?;
        let candidates = self.candidates(bank, ranked, 0, Some(current_id), completed);
        Ok(self.finish(candidates, false))
    }

    /// Like [`similar_to_problem`](Self::similar_to_problem), ranked by a
    /// blend of similarity and closeness to a target level. The target is the
    /// current problem's level, shifted by how `solve_time` compares with the
    /// time expected at that level.
    pub fn progression_for_problem(
        &self,
        bank: &ProblemBank,
        current_id: &str,
        completed: &HashSet<String>,
        solve_time: Option<Duration>,
    ) -> Result<Vec<Recommendation>> {
        let query = bank.require(current_id)?;
        let current = StepScale::PROGRESSION.classify(bank.problems()[query].step_count());
        let target = current.target_after(solve_time);
        debug!(%current, %target, ?solve_time, "progression");

        let corpus = self.tokenize_bank(bank);
        let ranked = self.rank_corpus(&corpus, query)?;
        let mut candidates = self.candidates(bank, ranked, 0, Some(current_id), completed);
        for rec in &mut candidates {
            rec.score = progression_score(rec.similarity, rec.difficulty, target);
        }
        Ok(self.finish(candidates, true))
    }

    /// Problems most similar to free text such as a chat transcript
    pub fn suggest_for_text(
        &self,
        bank: &ProblemBank,
        text: &str,
        completed: &HashSet<String>,
    ) -> Result<Vec<Recommendation>> {
        let corpus = self.text_corpus(bank, text);
        let ranked = self.rank_corpus(&corpus, 0)?;
        let candidates = self.candidates(bank, ranked, 1, None, completed);
        Ok(self.finish(candidates, false))
    }

    /// Like [`suggest_for_text`](Self::suggest_for_text), with a bonus for
    /// problems at the level the text's vocabulary suggests. Adjusted scores
    /// must clear [`CONVERSATION_MIN_SCORE`].
    pub fn suggest_for_conversation(
        &self,
        bank: &ProblemBank,
        text: &str,
        completed: &HashSet<String>,
    ) -> Result<Vec<Recommendation>> {
        let level = Difficulty::of_conversation(text);
        debug!(%level, "conversation");

        let corpus = self.text_corpus(bank, text);
        let ranked = self.rank_corpus(&corpus, 0)?;
        let problems = bank.problems();
        let mut candidates = self.candidates(bank, ranked, 1, None, completed);
        for rec in &mut candidates {
            rec.difficulty = StepScale::CONVERSATION.classify(problems[rec.index].step_count());
            rec.score = rec.similarity + conversation_bonus(rec.difficulty, level);
        }
        candidates.retain(|rec| rec.score > CONVERSATION_MIN_SCORE);
        Ok(self.finish(candidates, true))
    }

    /// First uncompleted problem after `current_id` in bank order, wrapping
    /// around. Never the current problem.
    pub fn next_sequential(
        &self,
        bank: &ProblemBank,
        current_id: &str,
        completed: &HashSet<String>,
    ) -> Result<Option<Recommendation>> {
        let current = bank.require(current_id)?;
        let problems = bank.problems();

        let next = (1..problems.len())
            .map(|step| (current + step) % problems.len())
            .find(|&i| !completed.contains(&problems[i].id))
            .map(|index| Recommendation {
                id: problems[index].id.clone(),
                index,
                similarity: 0.0,
                score: 0.0,
                difficulty: StepScale::PROGRESSION.classify(problems[index].step_count()),
            });

        debug!(current = current_id, found = next.is_some(), "next_sequential");
        Ok(next)
    }
}
