//! Subcommands and their arguments

use clap::{Args, Subcommand};
use std::path::PathBuf;
use std::time::Duration;

use crate::cli::parse::{parse_metric, parse_seconds, parse_similarity};
use mathrec_core::similarity::Metric;

/// Problem bank plus an optional metric override
#[derive(Args, Debug, Clone)]
pub struct BankArgs {
    /// Problem bank JSON file
    #[arg(long, short)]
    pub bank: PathBuf,

    /// Similarity metric: cosine, jaccard, euclidean or manhattan
    #[arg(long, short, value_parser = parse_metric)]
    pub metric: Option<Metric>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Normalize math text into tokens
    Normalize {
        /// Text to normalize, or "-" to read stdin
        text: String,

        /// Show every pipeline stage and extracted entities
        #[arg(long)]
        trace: bool,
    },

    /// Recommend the next problems to practice
    Recommend {
        #[command(flatten)]
        bank: BankArgs,

        /// Current problem id
        #[arg(long, short, required_unless_present = "text", conflicts_with = "text")]
        problem: Option<String>,

        /// Free text (e.g. a chat transcript) to match against
        #[arg(long, short)]
        text: Option<String>,

        /// Ids of problems already completed (repeatable)
        #[arg(long, short, action = clap::ArgAction::Append)]
        completed: Vec<String>,

        /// Number of recommendations
        #[arg(long, short = 'n')]
        top: Option<usize>,

        /// Recommendations must score strictly above this
        #[arg(long, value_parser = parse_similarity)]
        min_similarity: Option<f64>,

        /// Fall back to the next uncompleted problem in bank order when
        /// nothing clears the threshold (requires --problem)
        #[arg(long, requires = "problem")]
        fallback: bool,

        /// Blend difficulty into the ranking: progression from the current
        /// problem's level, or a match to the level of --text
        #[arg(long)]
        by_difficulty: bool,

        /// Seconds spent solving the current problem; faster than expected
        /// aims harder, slower aims easier
        #[arg(long, value_parser = parse_seconds, requires_all = ["problem", "by_difficulty"])]
        solve_time: Option<Duration>,
    },

    /// Nearest neighbors of a problem, unfiltered
    Similar {
        #[command(flatten)]
        bank: BankArgs,

        /// Problem id
        #[arg(long, short)]
        problem: String,

        /// Number of neighbors
        #[arg(long, short = 'n', default_value_t = 5)]
        top: usize,
    },

    /// Full pairwise similarity matrix of a bank
    Matrix {
        #[command(flatten)]
        bank: BankArgs,
    },

    /// Group problems by similarity to a cluster seed
    Cluster {
        #[command(flatten)]
        bank: BankArgs,

        /// Minimum similarity to the seed (default from config)
        #[arg(long, value_parser = parse_similarity)]
        threshold: Option<f64>,
    },

    /// Similarity distribution and TF-IDF statistics of a bank
    Stats {
        #[command(flatten)]
        bank: BankArgs,
    },

    /// Highest-weighted TF-IDF terms of a problem
    Terms {
        /// Problem bank JSON file
        #[arg(long, short)]
        bank: PathBuf,

        /// Problem id
        #[arg(long, short)]
        problem: String,

        /// Number of terms
        #[arg(long, short = 'n', default_value_t = 10)]
        top: usize,
    },
}
