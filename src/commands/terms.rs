//! `mathrec terms` - highest-weighted TF-IDF terms of a problem

use std::path::Path;

use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_bank, load_config, recommender};
use mathrec_core::error::Result;
use mathrec_core::format::format_score;
use mathrec_core::tfidf::top_terms;

/// Execute the terms command
pub fn execute(cli: &Cli, bank_path: &Path, problem: &str, top: usize) -> Result<()> {
    let config = load_config(cli)?;
    let bank = load_bank(bank_path)?;
    let engine = recommender(&config, None)?;

    let index = bank.require(problem)?;
    let matrix = engine.vectorize_bank(&bank);
    let terms = top_terms(&matrix.vectors[index], top);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": problem,
                "terms": terms,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for t in &terms {
                println!("{}\t{}", t.term, format_score(t.score));
            }
        }
    }

    Ok(())
}
