//! Difficulty estimates used to bias recommendations
//!
//! A problem's difficulty comes from the number of solution steps it lists.
//! Two blends build on it: progression from a just-solved problem (faster
//! than expected means step up, slower means step down) and a bonus for
//! problems that match the level of a free-text conversation.

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;
use std::time::Duration;

use regex::Regex;
use serde::Serialize;

use crate::error::{MathrecError, Result};

/// Weight of raw similarity in [`progression_score`]; the rest goes to
/// difficulty match
pub const PROGRESSION_SIMILARITY_WEIGHT: f64 = 0.6;

/// Conversation suggestions must score strictly above this after the
/// difficulty bonus
pub const CONVERSATION_MIN_SCORE: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// 1 for easy through 3 for hard
    pub fn level(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    pub fn from_level(level: u8) -> Option<Self> {
        match level {
            1 => Some(Difficulty::Easy),
            2 => Some(Difficulty::Medium),
            3 => Some(Difficulty::Hard),
            _ => None,
        }
    }

    /// Number of levels between two difficulties (0, 1 or 2)
    pub fn distance(self, other: Difficulty) -> u8 {
        self.level().abs_diff(other.level())
    }

    fn harder(self) -> Self {
        Self::from_level(self.level() + 1).unwrap_or(Difficulty::Hard)
    }

    fn easier(self) -> Self {
        Self::from_level(self.level().saturating_sub(1)).unwrap_or(Difficulty::Easy)
    }

    /// Typical time to solve a problem at this level
    pub fn expected_solve_time(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_secs(120),
            Difficulty::Medium => Duration::from_secs(300),
            Difficulty::Hard => Duration::from_secs(600),
        }
    }

    /// Level to aim for after solving a problem at this level.
    ///
    /// Under 0.7x the expected time steps up, over 1.5x steps down, and no
    /// timing keeps the level.
    pub fn target_after(self, solve_time: Option<Duration>) -> Self {
        let Some(taken) = solve_time.filter(|t| !t.is_zero()) else {
            return self;
        };
        let expected = self.expected_solve_time().as_secs_f64();
        let taken = taken.as_secs_f64();
        if taken < expected * 0.7 {
            self.harder()
        } else if taken > expected * 1.5 {
            self.easier()
        } else {
            self
        }
    }

    /// Level suggested by the vocabulary of free text.
    ///
    /// Advanced topics (trigonometry, logarithms, calculus, linear systems)
    /// read as hard, equations and functions as medium, bare arithmetic as
    /// easy. Anything else defaults to medium.
    pub fn of_conversation(text: &str) -> Self {
        let lower = text.to_lowercase();
        let k = keywords();
        if k.hard.is_match(&lower) {
            Difficulty::Hard
        } else if k.medium.is_match(&lower) {
            Difficulty::Medium
        } else if k.easy.is_match(&lower) {
            Difficulty::Easy
        } else {
            Difficulty::Medium
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        })
    }
}

impl FromStr for Difficulty {
    type Err = MathrecError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "easy" | "1" => Ok(Difficulty::Easy),
            "medium" | "2" => Ok(Difficulty::Medium),
            "hard" | "3" => Ok(Difficulty::Hard),
            _ => Err(MathrecError::invalid_value("difficulty", s)),
        }
    }
}

/// Step-count cut-offs mapping a problem to a [`Difficulty`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepScale {
    pub easy_max: usize,
    pub medium_max: usize,
}

impl StepScale {
    /// Scale for progression after a solved problem
    pub const PROGRESSION: StepScale = StepScale {
        easy_max: 3,
        medium_max: 6,
    };

    /// Looser scale for matching against conversation text
    pub const CONVERSATION: StepScale = StepScale {
        easy_max: 4,
        medium_max: 8,
    };

    pub fn classify(&self, steps: usize) -> Difficulty {
        if steps <= self.easy_max {
            Difficulty::Easy
        } else if steps <= self.medium_max {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }
}

/// Blend of similarity and closeness to the target level.
///
/// A perfect level match contributes the full difficulty weight, two
/// levels off contributes nothing.
pub fn progression_score(similarity: f64, candidate: Difficulty, target: Difficulty) -> f64 {
    let difficulty_match = 1.0 - f64::from(candidate.distance(target)) / 2.0;
    PROGRESSION_SIMILARITY_WEIGHT * similarity
        + (1.0 - PROGRESSION_SIMILARITY_WEIGHT) * difficulty_match
}

/// Score adjustment for a candidate against the conversation's level
pub fn conversation_bonus(candidate: Difficulty, conversation: Difficulty) -> f64 {
    match candidate.distance(conversation) {
        0 => 0.3,
        1 => 0.1,
        _ => -0.2,
    }
}

struct Keywords {
    hard: Regex,
    medium: Regex,
    easy: Regex,
}

static KEYWORDS: OnceLock<Keywords> = OnceLock::new();

fn keywords() -> &'static Keywords {
    KEYWORDS.get_or_init(|| Keywords {
        hard: Regex::new(
            "gauss|macierz|układ|równań|pochodna|całka|logarytm|sinus|cosinus|tangens",
        )
        .expect("valid hard keyword pattern"),
        medium: Regex::new("równanie|funkcja|wykres|pierwiastek|potęga|ułamek")
            .expect("valid medium keyword pattern"),
        easy: Regex::new(r"oblicz|dodaj|odejmij|[+\-*/0-9]").expect("valid easy keyword pattern"),
    })
}
