//! Mathrec Core Library
//!
//! Text normalization, TF-IDF vectorization and similarity search for
//! recommending the next math problem to practice.

pub mod config;
pub mod difficulty;
pub mod error;
pub mod format;
pub mod logging;
pub mod problems;
pub mod recommend;
pub mod similarity;
pub mod text;
pub mod tfidf;

pub use config::EngineConfig;
pub use difficulty::Difficulty;
pub use error::{MathrecError, Result};
pub use problems::{Problem, ProblemBank};
pub use recommend::{Recommendation, Recommender};
pub use similarity::{Metric, SimilarityCalculator, SimilarityResult};
pub use text::{normalize, Normalizer};
pub use tfidf::{SparseVector, TfidfVectorizer};
