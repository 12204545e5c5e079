//! `mathrec matrix` - pairwise similarity of every problem in a bank

use crate::cli::commands::BankArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_bank, load_config, recommender};
use mathrec_core::error::Result;
use mathrec_core::similarity::SimilarityCalculator;

/// Execute the matrix command
pub fn execute(cli: &Cli, args: &BankArgs) -> Result<()> {
    let config = load_config(cli)?;
    let bank = load_bank(&args.bank)?;
    let engine = recommender(&config, args.metric)?;

    let mut calculator = SimilarityCalculator::new(engine.metric());
    calculator.set_vectors(engine.vectorize_bank(&bank).vectors);
    let matrix = calculator.get_matrix()?;

    let ids: Vec<&str> = bank.problems().iter().map(|p| p.id.as_str()).collect();
    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "metric": engine.metric().to_string(),
                "ids": ids,
                "matrix": matrix,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if !cli.quiet {
                println!("\t{}", ids.join("\t"));
            }
            for (id, row) in ids.iter().zip(matrix.rows()) {
                let cells: Vec<String> = row.iter().map(|s| format!("{:.2}", s)).collect();
                println!("{}\t{}", id, cells.join("\t"));
            }
        }
    }

    Ok(())
}
