//! Value parsers for flags
//!
//! Parsers fail with [`MathrecError`] so a rejected value keeps its error
//! type through clap; see [`crate::cli::usage_failure`].

use std::time::Duration;

use mathrec_core::error::MathrecError;
use mathrec_core::format::OutputFormat;
use mathrec_core::similarity::Metric;

/// Parse output format from string
pub fn parse_format(s: &str) -> Result<OutputFormat, MathrecError> {
    s.parse()
}

/// Parse similarity metric from string
pub fn parse_metric(s: &str) -> Result<Metric, MathrecError> {
    s.parse()
}

/// Parse a similarity threshold in [-1, 1]
pub fn parse_similarity(s: &str) -> Result<f64, MathrecError> {
    match s.parse::<f64>() {
        Ok(value) if (-1.0..=1.0).contains(&value) => Ok(value),
        _ => Err(MathrecError::invalid_value("similarity in [-1, 1]", s)),
    }
}

/// Parse a non-negative number of seconds
pub fn parse_seconds(s: &str) -> Result<Duration, MathrecError> {
    s.parse::<f64>()
        .ok()
        .and_then(|secs| Duration::try_from_secs_f64(secs).ok())
        .ok_or_else(|| MathrecError::invalid_value("number of seconds", s))
}
