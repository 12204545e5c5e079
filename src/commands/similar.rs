//! `mathrec similar` - raw nearest neighbors of a problem

use crate::cli::commands::BankArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_bank, load_config, recommender};
use mathrec_core::error::Result;
use mathrec_core::format::format_score;
use mathrec_core::similarity::find_most_similar;

/// Execute the similar command
pub fn execute(cli: &Cli, args: &BankArgs, problem: &str, top: usize) -> Result<()> {
    let config = load_config(cli)?;
    let bank = load_bank(&args.bank)?;
    let engine = recommender(&config, args.metric)?;

    let target = bank.require(problem)?;
    let matrix = engine.vectorize_bank(&bank);
    let results = find_most_similar(&matrix.vectors, target, top, engine.metric())?;

    let problems = bank.problems();
    match cli.format {
        OutputFormat::Json => {
            let output: Vec<_> = results
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "id": problems[r.index].id,
                        "index": r.index,
                        "similarity": r.similarity,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for r in &results {
                println!("{}\t{}", problems[r.index].id, format_score(r.similarity));
            }
        }
    }

    Ok(())
}
