//! CLI argument parsing for mathrec
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod commands;
pub mod parse;

use clap::error::ErrorKind;
use clap::Parser;
use std::error::Error as _;
use std::path::PathBuf;

pub use commands::Commands;
use mathrec_core::error::MathrecError;
pub use mathrec_core::format::OutputFormat;
use parse::parse_format;

/// Mathrec - next-problem recommendations for math practice banks
#[derive(Parser, Debug)]
#[command(name = "mathrec")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human or json)
    #[arg(long, global = true, value_parser = parse_format, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level or filter directive (e.g. "debug", "mathrec_core=trace")
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Engine config file (default: $MATHREC_CONFIG_DIR/config.toml or the
    /// platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// The mathrec error behind a failed parse.
///
/// Values rejected by our own parsers come back as the error the parser
/// raised, other clap usage failures as `UsageError`. Help and version are
/// not failures and are not expected here.
pub fn usage_failure(err: &clap::Error) -> MathrecError {
    let rejected = err
        .source()
        .and_then(|source| source.downcast_ref::<MathrecError>());

    match (err.kind(), rejected) {
        (ErrorKind::ValueValidation, Some(MathrecError::UnknownFormat(v))) => {
            MathrecError::UnknownFormat(v.clone())
        }
        (ErrorKind::ValueValidation, Some(MathrecError::UnknownMetric(v))) => {
            MathrecError::UnknownMetric(v.clone())
        }
        (ErrorKind::ValueValidation, Some(MathrecError::InvalidValue { context, value })) => {
            MathrecError::invalid_value(context, value)
        }
        _ if err.use_stderr() => MathrecError::UsageError(err.to_string()),
        _ => MathrecError::Other(err.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mathrec",
            "normalize",
            "sin 30°",
            "--format",
            "json",
            "--quiet",
        ])
        .unwrap();
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.quiet);
    }

    #[test]
    fn test_recommend_requires_problem_or_text() {
        let err = Cli::try_parse_from(["mathrec", "recommend", "--bank", "bank.json"])
            .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);

        let err = Cli::try_parse_from([
            "mathrec", "recommend", "--bank", "b.json", "--problem", "a", "--text", "t",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    fn failure(args: &[&str]) -> MathrecError {
        usage_failure(&Cli::try_parse_from(args).unwrap_err())
    }

    #[test]
    fn test_usage_failure_keeps_parser_errors() {
        let err = failure(&["mathrec", "matrix", "--bank", "b.json", "--metric", "hamming"]);
        assert!(matches!(err, MathrecError::UnknownMetric(ref v) if v == "hamming"));

        let err = failure(&["mathrec", "--format", "yaml", "normalize", "x"]);
        assert_eq!(err.error_type(), "unknown_format");

        let err = failure(&[
            "mathrec", "cluster", "--bank", "b.json", "--threshold", "3",
        ]);
        assert_eq!(err.error_type(), "invalid_value");
    }

    #[test]
    fn test_usage_failure_for_structural_errors() {
        let err = failure(&["mathrec", "recommend", "--bank", "b.json"]);
        assert!(matches!(err, MathrecError::UsageError(_)));
        assert_eq!(err.exit_code(), mathrec_core::error::ExitCode::Usage);

        let err = failure(&["mathrec", "frobnicate"]);
        assert!(matches!(err, MathrecError::UsageError(_)));
    }
}
