//! Shared setup for commands: config, problem bank, recommender

use std::path::Path;

use mathrec_core::config::EngineConfig;
use mathrec_core::error::Result;
use mathrec_core::problems::ProblemBank;
use mathrec_core::recommend::Recommender;
use mathrec_core::similarity::Metric;
use tracing::debug;

use crate::cli::Cli;

/// Load the engine config from `--config` or the default location
pub fn load_config(cli: &Cli) -> Result<EngineConfig> {
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::discover()?,
    };
    debug!(metric = %config.metric, top_n = config.top_n, "load_config");
    Ok(config)
}

pub fn load_bank(path: &Path) -> Result<ProblemBank> {
    let bank = ProblemBank::load(path)?;
    debug!(path = %path.display(), problems = bank.len(), "load_bank");
    Ok(bank)
}

/// Metric from the command line, else from config. A Jaccard override keeps
/// the configured threshold.
pub fn resolve_metric(config: &EngineConfig, requested: Option<Metric>) -> Result<Metric> {
    match requested {
        Some(Metric::Jaccard { .. }) => Ok(Metric::Jaccard {
            threshold: config.jaccard_threshold,
        }),
        Some(metric) => Ok(metric),
        None => config.metric(),
    }
}

pub fn recommender(config: &EngineConfig, requested: Option<Metric>) -> Result<Recommender> {
    let metric = resolve_metric(config, requested)?;
    Ok(Recommender::from_config(config)?.with_metric(metric))
}
