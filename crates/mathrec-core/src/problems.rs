//! Problem banks loaded from JSON

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{MathrecError, Result};

/// A single exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub id: String,

    /// Statement text, possibly with LaTeX. Missing or non-string values read as empty.
    #[serde(default, deserialize_with = "lenient_string")]
    pub statement: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<Value>,

    /// Any other fields, kept as-is
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Problem {
    /// Number of listed solution steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

fn lenient_string<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        _ => Ok(String::new()),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum BankFile {
    List(Vec<Problem>),
    Wrapped { problems: Vec<Problem> },
}

/// Ordered problem collection with unique ids
#[derive(Debug, Clone, Default)]
pub struct ProblemBank {
    problems: Vec<Problem>,
}

impl ProblemBank {
    /// Load a bank from a JSON file: either a top-level array or `{"problems": [...]}`
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| match e {
            MathrecError::InvalidBank { reason, .. } => MathrecError::invalid_bank(path, reason),
            MathrecError::Json(err) => MathrecError::invalid_bank(path, err),
            other => other,
        })
    }

    /// Parse a bank from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        let problems = match serde_json::from_str::<BankFile>(json)? {
            BankFile::List(problems) | BankFile::Wrapped { problems } => problems,
        };
        Self::new(problems)
    }

    /// Build a bank, rejecting empty or duplicate ids
    pub fn new(problems: Vec<Problem>) -> Result<Self> {
        let mut seen = HashSet::new();
        for problem in &problems {
            if problem.id.trim().is_empty() {
                return Err(MathrecError::invalid_bank("<memory>", "problem with empty id"));
            }
            if !seen.insert(problem.id.as_str()) {
                return Err(MathrecError::invalid_bank(
                    "<memory>",
                    format!("duplicate problem id: {}", problem.id),
                ));
            }
        }
        Ok(ProblemBank { problems })
    }

    /// Position of a problem in bank order
    pub fn position(&self, id: &str) -> Option<usize> {
        self.problems.iter().position(|p| p.id == id)
    }

    pub fn get(&self, id: &str) -> Option<&Problem> {
        self.problems.iter().find(|p| p.id == id)
    }

    /// Like [`position`](Self::position) but fails with `ProblemNotFound`
    pub fn require(&self, id: &str) -> Result<usize> {
        self.position(id).ok_or_else(|| MathrecError::ProblemNotFound { id: id.to_string() })
    }

    pub fn problems(&self) -> &[Problem] {
        &self.problems
    }

    pub fn statements(&self) -> impl Iterator<Item = &str> {
        self.problems.iter().map(|p| p.statement.as_str())
    }

    pub fn len(&self) -> usize {
        self.problems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.problems.is_empty()
    }
}
