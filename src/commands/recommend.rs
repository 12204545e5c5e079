//! `mathrec recommend` - suggest the next problems to practice
//!
//! - `--problem <id>`: rank by similarity to that problem's statement
//! - `--text <text>`: rank by similarity to free text
//! - `--fallback`: next uncompleted problem in bank order when nothing
//!   clears the threshold
//! - `--by-difficulty`: rank by progression (with `--problem`, optionally
//!   `--solve-time`) or by the text's level (with `--text`)

use std::collections::HashSet;
use std::time::Duration;

use tracing::debug;

use crate::cli::commands::BankArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_bank, load_config, recommender};
use mathrec_core::error::Result;
use mathrec_core::format::format_score;
use mathrec_core::recommend::Recommendation;

pub struct RecommendOptions<'a> {
    pub bank: &'a BankArgs,
    pub problem: Option<&'a str>,
    pub text: Option<&'a str>,
    pub completed: &'a [String],
    pub top: Option<usize>,
    pub min_similarity: Option<f64>,
    pub fallback: bool,
    pub by_difficulty: bool,
    pub solve_time: Option<Duration>,
}

/// Execute the recommend command
pub fn execute(cli: &Cli, opts: &RecommendOptions) -> Result<()> {
    let config = load_config(cli)?;
    let bank = load_bank(&opts.bank.bank)?;

    let mut engine = recommender(&config, opts.bank.metric)?;
    if let Some(top) = opts.top {
        engine = engine.with_top_n(top);
    }
    if let Some(min) = opts.min_similarity {
        engine = engine.with_min_similarity(min);
    }

    let completed: HashSet<String> = opts.completed.iter().cloned().collect();

    let mut recommendations = match (opts.problem, opts.text, opts.by_difficulty) {
        (Some(id), _, false) => engine.similar_to_problem(&bank, id, &completed)?,
        (Some(id), _, true) => {
            engine.progression_for_problem(&bank, id, &completed, opts.solve_time)?
        }
        (None, Some(text), false) => engine.suggest_for_text(&bank, text, &completed)?,
        (None, Some(text), true) => engine.suggest_for_conversation(&bank, text, &completed)?,
        (None, None, _) => mathrec_core::bail_usage!("either --problem or --text is required"),
    };

    let mut used_fallback = false;
    if recommendations.is_empty() && opts.fallback {
        if let Some(id) = opts.problem {
            recommendations.extend(engine.next_sequential(&bank, id, &completed)?);
            used_fallback = !recommendations.is_empty();
        }
    }
    debug!(
        count = recommendations.len(),
        fallback = used_fallback,
        "recommend"
    );

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "metric": engine.metric().to_string(),
                "fallback": used_fallback,
                "by_difficulty": opts.by_difficulty,
                "recommendations": recommendations,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print_human(cli, &recommendations, used_fallback, opts.by_difficulty)
        }
    }

    Ok(())
}

fn print_human(
    cli: &Cli,
    recommendations: &[Recommendation],
    used_fallback: bool,
    by_difficulty: bool,
) {
    if recommendations.is_empty() {
        if !cli.quiet {
            eprintln!("No recommendations");
        }
        return;
    }

    for rec in recommendations {
        if used_fallback {
            println!("{}\t(next in order)", rec.id);
        } else if by_difficulty {
            println!(
                "{}\t{}\t{}\tsimilarity {}",
                rec.id,
                format_score(rec.score),
                rec.difficulty,
                format_score(rec.similarity)
            );
        } else {
            println!("{}\t{}", rec.id, format_score(rec.similarity));
        }
    }
}
