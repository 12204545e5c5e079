//! Error types and exit codes for mathrec
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (I/O, parsing)
//! - 2: Usage error (bad flags/args, unknown metric)
//! - 3: Data/state error (unfitted vectorizer, index out of range, bad problem bank)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/state error (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during mathrec operations
#[derive(Error, Debug)]
pub enum MathrecError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("unknown metric: {0} (expected: cosine, jaccard, euclidean, or manhattan)")]
    UnknownMetric(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/state errors (exit code 3)
    #[error("vectorizer must be fitted before transforming")]
    NotFitted,

    #[error("no vectors set")]
    VectorsNotSet,

    #[error("index {index} out of range for {len} vectors")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("problem not found: {id}")]
    ProblemNotFound { id: String },

    #[error("invalid problem bank {path:?}: {reason}")]
    InvalidBank { path: PathBuf, reason: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl MathrecError {
    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        MathrecError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for an index outside a vector collection
    pub fn index_out_of_range(index: usize, len: usize) -> Self {
        MathrecError::IndexOutOfRange { index, len }
    }

    /// Create an error for a malformed problem bank
    pub fn invalid_bank(path: impl Into<PathBuf>, reason: impl std::fmt::Display) -> Self {
        MathrecError::InvalidBank {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            MathrecError::UnknownFormat(_)
            | MathrecError::UnknownMetric(_)
            | MathrecError::UsageError(_)
            | MathrecError::InvalidValue { .. } => ExitCode::Usage,

            MathrecError::NotFitted
            | MathrecError::VectorsNotSet
            | MathrecError::IndexOutOfRange { .. }
            | MathrecError::ProblemNotFound { .. }
            | MathrecError::InvalidBank { .. } => ExitCode::Data,

            MathrecError::Io(_)
            | MathrecError::Json(_)
            | MathrecError::Toml(_)
            | MathrecError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            MathrecError::UnknownFormat(_) => "unknown_format",
            MathrecError::UnknownMetric(_) => "unknown_metric",
            MathrecError::UsageError(_) => "usage_error",
            MathrecError::InvalidValue { .. } => "invalid_value",
            MathrecError::NotFitted => "not_fitted",
            MathrecError::VectorsNotSet => "vectors_not_set",
            MathrecError::IndexOutOfRange { .. } => "index_out_of_range",
            MathrecError::ProblemNotFound { .. } => "problem_not_found",
            MathrecError::InvalidBank { .. } => "invalid_bank",
            MathrecError::Io(_) => "io_error",
            MathrecError::Json(_) => "json_error",
            MathrecError::Toml(_) => "toml_error",
            MathrecError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for mathrec operations
pub type Result<T> = std::result::Result<T, MathrecError>;
