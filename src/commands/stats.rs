//! `mathrec stats` - diagnostics for a problem bank

use crate::cli::commands::BankArgs;
use crate::cli::{Cli, OutputFormat};
use crate::commands::helpers::{load_bank, load_config, recommender};
use mathrec_core::error::Result;
use mathrec_core::format::format_score;
use mathrec_core::similarity::{analyze_similarity_distribution, build_similarity_matrix};
use mathrec_core::tfidf::analyze_tfidf_statistics;

/// Execute the stats command
pub fn execute(cli: &Cli, args: &BankArgs) -> Result<()> {
    let config = load_config(cli)?;
    let bank = load_bank(&args.bank)?;
    let engine = recommender(&config, args.metric)?;

    let tfidf = engine.vectorize_bank(&bank);
    let matrix = build_similarity_matrix(&tfidf.vectors, engine.metric());
    let distribution = analyze_similarity_distribution(&matrix);
    let terms = analyze_tfidf_statistics(&tfidf);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "metric": engine.metric().to_string(),
                "similarity": distribution,
                "tfidf": terms,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("problems:    {}", terms.documents_count);
            println!("vocabulary:  {}", terms.vocabulary_size);
            println!("avg terms:   {:.2}", terms.avg_terms_per_document);
            println!(
                "idf:         min {} / max {} / avg {}",
                format_score(terms.idf_range.min),
                format_score(terms.idf_range.max),
                format_score(terms.idf_range.avg)
            );
            println!("pairs:       {}", distribution.count);
            println!(
                "similarity:  min {} / median {} / max {}",
                format_score(distribution.min),
                format_score(distribution.median),
                format_score(distribution.max)
            );
            println!(
                "             mean {} / std {} / q1 {} / q3 {}",
                format_score(distribution.mean),
                format_score(distribution.std),
                format_score(distribution.q1),
                format_score(distribution.q3)
            );
            if !terms.most_discriminative_terms.is_empty() {
                let top: Vec<&str> = terms
                    .most_discriminative_terms
                    .iter()
                    .map(|t| t.term.as_str())
                    .collect();
                println!("top terms:   {}", top.join(", "));
            }
        }
    }

    Ok(())
}
