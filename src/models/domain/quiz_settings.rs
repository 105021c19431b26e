use std::{fmt, ops::RangeInclusive, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Difficulty band: controls question count, per-question timer and the
/// opponent's skill distribution.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Easy,
        Difficulty::Medium,
        Difficulty::Hard,
        Difficulty::Expert,
    ];

    pub fn question_count(self) -> usize {
        match self {
            Difficulty::Easy => 5,
            Difficulty::Medium => 8,
            Difficulty::Hard => 12,
            Difficulty::Expert => 15,
        }
    }

    pub fn time_limit_secs(self) -> u32 {
        match self {
            Difficulty::Easy => 30,
            Difficulty::Medium => 25,
            Difficulty::Hard => 20,
            Difficulty::Expert => 15,
        }
    }

    pub fn skill_band(self) -> RangeInclusive<u8> {
        match self {
            Difficulty::Easy => 3..=5,
            Difficulty::Medium => 5..=7,
            Difficulty::Hard => 7..=9,
            Difficulty::Expert => 8..=10,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Expert => "expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "expert" => Ok(Difficulty::Expert),
            other => Err(AppError::ValidationError(format!(
                "Unknown difficulty '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpponentType {
    #[default]
    Ai,
    Friend,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    pub domain: String,
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub opponent_type: OpponentType,
    pub number_of_questions: usize,
}

impl QuizSettings {
    /// The question count is always derived from the difficulty.
    pub fn new(
        domain: impl Into<String>,
        subject: impl Into<String>,
        topic: impl Into<String>,
        difficulty: Difficulty,
        opponent_type: OpponentType,
    ) -> Self {
        Self {
            domain: domain.into(),
            subject: subject.into(),
            topic: topic.into(),
            difficulty,
            opponent_type,
            number_of_questions: difficulty.question_count(),
        }
    }
}
