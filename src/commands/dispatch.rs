//! Command dispatch logic for mathrec
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use mathrec_core::error::Result;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        Commands::Normalize { text, trace } => commands::normalize::execute(cli, text, *trace),

        Commands::Recommend {
            bank,
            problem,
            text,
            completed,
            top,
            min_similarity,
            fallback,
            by_difficulty,
            solve_time,
        } => commands::recommend::execute(
            cli,
            &commands::recommend::RecommendOptions {
                bank,
                problem: problem.as_deref(),
                text: text.as_deref(),
                completed,
                top: *top,
                min_similarity: *min_similarity,
                fallback: *fallback,
                by_difficulty: *by_difficulty,
                solve_time: *solve_time,
            },
        ),

        Commands::Similar { bank, problem, top } => {
            commands::similar::execute(cli, bank, problem, *top)
        }

        Commands::Matrix { bank } => commands::matrix::execute(cli, bank),

        Commands::Cluster { bank, threshold } => commands::cluster::execute(cli, bank, *threshold),

        Commands::Stats { bank } => commands::stats::execute(cli, bank),

        Commands::Terms { bank, problem, top } => {
            commands::terms::execute(cli, bank, problem, *top)
        }
    };

    debug!(elapsed = ?start.elapsed(), "execute_command");
    result
}
