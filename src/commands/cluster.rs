//! `mathrec cluster` - group problems around cluster seeds

use crate::cli::commands::BankArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_bank, load_config, recommender};
use mathrec_core::error::Result;
use mathrec_core::similarity::cluster_by_similarity;

/// Execute the cluster command
pub fn execute(cli: &Cli, args: &BankArgs, threshold: Option<f64>) -> Result<()> {
    let config = load_config(cli)?;
    let bank = load_bank(&args.bank)?;
    let engine = recommender(&config, args.metric)?;
    let threshold = threshold.unwrap_or(config.cluster_threshold);

    let matrix = engine.vectorize_bank(&bank);
    let clusters = cluster_by_similarity(&matrix.vectors, threshold, engine.metric());

    let problems = bank.problems();
    let named: Vec<Vec<&str>> = clusters
        .iter()
        .map(|members| members.iter().map(|&i| problems[i].id.as_str()).collect())
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "metric": engine.metric().to_string(),
                "threshold": threshold,
                "clusters": named,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for (n, members) in named.iter().enumerate() {
                println!("cluster {}: {}", n + 1, members.join(", "));
            }
        }
    }

    Ok(())
}
