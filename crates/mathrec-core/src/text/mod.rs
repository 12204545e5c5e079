//! Text normalization for Polish mathematical content
//!
//! Pipeline: LaTeX stripping → term aliasing → tokenization with stop word
//! removal → order-preserving deduplication. Every stage is total: empty or
//! malformed input yields an empty result.

pub mod dictionary;
mod latex;

pub use latex::clean_latex;

use regex::{NoExpand, Regex};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

use crate::error::{MathrecError, Result};
use dictionary::{STOP_WORDS, TERM_ALIASES};

static STOP_WORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

static DEFAULT_NORMALIZER: OnceLock<Normalizer> = OnceLock::new();

fn get_stop_words() -> &'static HashSet<&'static str> {
    STOP_WORD_SET.get_or_init(|| STOP_WORDS.iter().copied().collect())
}

/// One alias rule: whole-word regex for word-like keys, padded literal
/// replacement for symbol keys such as `°` or `π`.
///
/// Both sides are stored lowercased since matching runs on lowercased text.
#[derive(Debug, Clone)]
struct AliasRule {
    alias: String,
    canonical: String,
    word: Option<Regex>,
}

impl AliasRule {
    fn new(alias: &str, canonical: &str) -> Result<Self> {
        let alias = alias.to_lowercase();
        let word = if alias.chars().any(|c| c.is_ascii_alphanumeric()) {
            let pattern = format!(r"\b{}\b", regex::escape(&alias));
            Some(Regex::new(&pattern).map_err(|e| MathrecError::invalid_value("term alias", e))?)
        } else {
            None
        };
        Ok(Self {
            alias,
            canonical: canonical.to_lowercase(),
            word,
        })
    }

    fn is_symbol(&self) -> bool {
        self.word.is_none()
    }

    fn apply(&self, text: &str) -> String {
        match &self.word {
            Some(re) => re.replace_all(text, NoExpand(&self.canonical)).into_owned(),
            None if text.contains(&self.alias) => {
                text.replace(&self.alias, &format!(" {} ", self.canonical))
            }
            None => text.to_string(),
        }
    }
}

/// Text normalizer holding the alias dictionary.
///
/// Symbol rules run before word rules: a glyph glued to a word (`πrad`)
/// hides the word boundary until the glyph is padded out.
#[derive(Debug, Clone)]
pub struct Normalizer {
    symbol_rules: Vec<AliasRule>,
    word_rules: Vec<AliasRule>,
    canonical: HashSet<String>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::from_table(TERM_ALIASES.iter().copied())
            .expect("built-in alias table compiles")
    }
}

impl Normalizer {
    /// Shared normalizer with the built-in dictionary
    pub fn builtin() -> &'static Normalizer {
        DEFAULT_NORMALIZER.get_or_init(Normalizer::default)
    }

    /// Built-in dictionary extended with extra aliases, each applied after the
    /// built-ins of its kind (symbol or word)
    pub fn with_aliases<I, A, C>(extra: I) -> Result<Self>
    where
        I: IntoIterator<Item = (A, C)>,
        A: AsRef<str>,
        C: AsRef<str>,
    {
        let mut normalizer = Self::builtin().clone();
        for (alias, canonical) in extra {
            normalizer.push(AliasRule::new(alias.as_ref(), canonical.as_ref())?);
        }
        Ok(normalizer)
    }

    fn from_table<'a>(table: impl Iterator<Item = (&'a str, &'a str)>) -> Result<Self> {
        let mut normalizer = Self {
            symbol_rules: Vec::new(),
            word_rules: Vec::new(),
            canonical: HashSet::new(),
        };
        for (alias, target) in table {
            normalizer.push(AliasRule::new(alias, target)?);
        }
        Ok(normalizer)
    }

    fn push(&mut self, rule: AliasRule) {
        self.canonical.insert(rule.canonical.clone());
        if rule.is_symbol() {
            self.symbol_rules.push(rule);
        } else {
            self.word_rules.push(rule);
        }
    }

    /// Lowercase text and fold every alias to its canonical form
    pub fn normalize_math_terms(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }
        self.symbol_rules
            .iter()
            .chain(&self.word_rules)
            .fold(text.to_lowercase(), |acc, rule| rule.apply(&acc))
    }

    /// Split text into tokens and drop stop words.
    ///
    /// Canonical terms, numerals/fractions and single-letter variables are
    /// always kept, even when they collide with a stop word.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        let stop_words = get_stop_words();
        text.to_lowercase()
            .split(is_separator)
            .filter(|s| !s.is_empty())
            .filter(|token| {
                self.canonical.contains(*token)
                    || is_numeral(token)
                    || is_variable(token)
                    || !stop_words.contains(token)
            })
            .map(str::to_string)
            .collect()
    }

    /// Full pipeline producing a deduplicated token sequence
    pub fn normalize(&self, text: &str) -> Vec<String> {
        if text.is_empty() {
            return Vec::new();
        }
        let cleaned = clean_latex(text);
        let normalized = self.normalize_math_terms(&cleaned);
        dedup_preserving_order(self.tokenize(&normalized))
    }

    /// Every intermediate stage of the pipeline, for diagnostics
    pub fn trace(&self, text: &str) -> TextTrace {
        let cleaned = clean_latex(text);
        let normalized = self.normalize_math_terms(&cleaned);
        let tokens = self.tokenize(&normalized);
        TextTrace {
            original: text.to_string(),
            cleaned,
            normalized,
            final_tokens: dedup_preserving_order(tokens.clone()),
            tokens,
            entities: extract_math_entities(text),
        }
    }
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, '.' | ',' | ';' | ':' | '(' | ')' | '[' | ']')
}

fn is_numeral(token: &str) -> bool {
    token
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '/'))
}

fn is_variable(token: &str) -> bool {
    let mut chars = token.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_alphabetic())
}

fn dedup_preserving_order(tokens: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    tokens
        .into_iter()
        .filter(|t| seen.insert(t.clone()))
        .collect()
}

/// Normalize raw math text into a deduplicated token sequence using the
/// built-in dictionary
pub fn normalize(text: &str) -> Vec<String> {
    Normalizer::builtin().normalize(text)
}

/// Alias of [`normalize`] under the pipeline's descriptive name
pub fn preprocess_math_text(text: &str) -> Vec<String> {
    normalize(text)
}

/// Fold aliases with the built-in dictionary
pub fn normalize_math_terms(text: &str) -> String {
    Normalizer::builtin().normalize_math_terms(text)
}

/// Tokenize with the built-in dictionary's always-keep set
pub fn tokenize(text: &str) -> Vec<String> {
    Normalizer::builtin().tokenize(text)
}

/// Trace the built-in pipeline
pub fn trace_text_processing(text: &str) -> TextTrace {
    Normalizer::builtin().trace(text)
}

/// Kind of a mathematical entity found in raw text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Number,
    Variable,
    Operator,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Number => write!(f, "number"),
            EntityKind::Variable => write!(f, "variable"),
            EntityKind::Operator => write!(f, "operator"),
        }
    }
}

/// A number, variable or operator extracted from text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MathEntity {
    #[serde(rename = "type")]
    pub kind: EntityKind,
    pub value: String,
}

struct EntityPatterns {
    number: Regex,
    variable: Regex,
    operator: Regex,
}

static ENTITY_PATTERNS: OnceLock<EntityPatterns> = OnceLock::new();

/// Extract numbers, then variables, then operators, each in text order
pub fn extract_math_entities(text: &str) -> Vec<MathEntity> {
    let p = ENTITY_PATTERNS.get_or_init(|| EntityPatterns {
        number: Regex::new(r"[0-9]+(?:[.,][0-9]+)?(?:/[0-9]+)?").expect("valid number pattern"),
        variable: Regex::new(r"[a-zA-Z](?:[_^][0-9a-zA-Z]*)?").expect("valid variable pattern"),
        operator: Regex::new(r"[+\-*/=<>≤≥≠±∓]").expect("valid operator pattern"),
    });

    [
        (EntityKind::Number, &p.number),
        (EntityKind::Variable, &p.variable),
        (EntityKind::Operator, &p.operator),
    ]
    .into_iter()
    .flat_map(|(kind, re)| {
        re.find_iter(text).map(move |m| MathEntity {
            kind,
            value: m.as_str().to_string(),
        })
    })
    .collect()
}

/// Intermediate results of each normalization stage
#[derive(Debug, Clone, Serialize)]
pub struct TextTrace {
    pub original: String,
    pub cleaned: String,
    pub normalized: String,
    pub tokens: Vec<String>,
    pub final_tokens: Vec<String>,
    pub entities: Vec<MathEntity>,
}
