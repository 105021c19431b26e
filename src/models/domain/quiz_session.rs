use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{
    errors::{AppError, AppResult},
    models::domain::{opponent::Opponent, quiz_question::QuizQuestion, quiz_settings::QuizSettings},
};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStage {
    #[default]
    Lobby,
    Battle,
    Results,
}

impl std::fmt::Display for QuizStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizStage::Lobby => write!(f, "lobby"),
            QuizStage::Battle => write!(f, "battle"),
            QuizStage::Results => write!(f, "results"),
        }
    }
}

/// State of one quiz battle. Transitions are synchronous and guarded by
/// `stage`; the async orchestration lives in `QuizService`.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSessionState {
    pub stage: QuizStage,
    pub settings: Option<QuizSettings>,
    pub questions: Vec<QuizQuestion>,
    pub current_question_index: usize,
    pub current_answered: bool,
    pub player_score: u32,
    pub opponent_score: u32,
    pub opponent: Option<Opponent>,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub quiz_duration_secs: u64,
    /// Bumped on every start and reset. Opponent answers scheduled under an
    /// older epoch are discarded.
    pub epoch: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerVerdict {
    pub correct: bool,
    pub timed_out: bool,
    pub question_index: usize,
    pub correct_option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizOutcome {
    Victory,
    Draw,
    Defeat,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResults {
    pub outcome: QuizOutcome,
    pub player_score: u32,
    pub opponent_score: u32,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub total_questions: usize,
    pub accuracy: u32,
    pub quiz_duration_secs: u64,
    pub formatted_duration: String,
    pub opponent: Option<Opponent>,
}

impl QuizSessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ensure_stage(&self, expected: QuizStage, action: &str) -> AppResult<()> {
        if self.stage != expected {
            return Err(AppError::InvalidState(format!(
                "Cannot {} while the quiz is in the {} stage",
                action, self.stage
            )));
        }
        Ok(())
    }

    pub fn current_question(&self) -> Option<&QuizQuestion> {
        self.questions.get(self.current_question_index)
    }

    pub fn is_last_question(&self) -> bool {
        self.current_question_index + 1 >= self.questions.len()
    }

    /// Lobby -> Battle. Counters are reset and the start time stamped.
    pub fn begin(
        &mut self,
        settings: QuizSettings,
        questions: Vec<QuizQuestion>,
        opponent: Opponent,
        now: DateTime<Utc>,
    ) -> AppResult<()> {
        self.ensure_stage(QuizStage::Lobby, "start a quiz")?;

        if questions.is_empty() {
            return Err(AppError::GenerationError(format!(
                "No questions available for topic '{}'",
                settings.topic
            )));
        }

        *self = Self {
            stage: QuizStage::Battle,
            settings: Some(settings),
            questions,
            opponent: Some(opponent),
            started_at: Some(now),
            epoch: self.epoch + 1,
            ..Self::default()
        };

        Ok(())
    }

    /// Resolves the player's answer to the current question. `None` means the
    /// question timer ran out and counts as an incorrect answer.
    pub fn answer(&mut self, selected_option: Option<&str>) -> AppResult<AnswerVerdict> {
        self.ensure_stage(QuizStage::Battle, "answer a question")?;

        if self.current_answered {
            return Err(AppError::InvalidState(format!(
                "Question {} has already been answered",
                self.current_question_index + 1
            )));
        }

        let question = self.current_question().ok_or_else(|| {
            AppError::InternalError(format!(
                "Question index {} is out of range",
                self.current_question_index
            ))
        })?;

        let correct = selected_option.is_some_and(|id| question.is_correct(id));
        let verdict = AnswerVerdict {
            correct,
            timed_out: selected_option.is_none(),
            question_index: self.current_question_index,
            correct_option: question.correct_option.clone(),
            explanation: question.explanation.clone(),
        };

        self.questions_answered += 1;
        if correct {
            self.player_score += 1;
            self.correct_answers += 1;
        }
        self.current_answered = true;

        Ok(verdict)
    }

    /// Credits a delayed opponent answer. Returns whether the score changed.
    pub fn apply_opponent_answer(&mut self, epoch: u64, correct: bool) -> bool {
        if epoch != self.epoch || self.stage == QuizStage::Lobby || !correct {
            return false;
        }
        self.opponent_score += 1;
        true
    }

    /// Moves to the next question, or to Results after the last one.
    pub fn advance(&mut self, now: DateTime<Utc>) -> AppResult<QuizStage> {
        self.ensure_stage(QuizStage::Battle, "move to the next question")?;

        if !self.is_last_question() {
            self.current_question_index += 1;
            self.current_answered = false;
            return Ok(self.stage);
        }

        let started_at = self.started_at.unwrap_or(now);
        self.ended_at = Some(now);
        self.quiz_duration_secs = ((now - started_at).num_milliseconds().max(0) / 1000) as u64;
        self.stage = QuizStage::Results;

        Ok(self.stage)
    }

    pub fn reset(&mut self) {
        *self = Self {
            epoch: self.epoch + 1,
            ..Self::default()
        };
    }

    pub fn results(&self) -> AppResult<QuizResults> {
        self.ensure_stage(QuizStage::Results, "view results")?;

        let outcome = match self.player_score.cmp(&self.opponent_score) {
            std::cmp::Ordering::Greater => QuizOutcome::Victory,
            std::cmp::Ordering::Equal => QuizOutcome::Draw,
            std::cmp::Ordering::Less => QuizOutcome::Defeat,
        };

        let accuracy = if self.questions_answered > 0 {
            (f64::from(self.correct_answers) / f64::from(self.questions_answered) * 100.0).round()
                as u32
        } else {
            0
        };

        Ok(QuizResults {
            outcome,
            player_score: self.player_score,
            opponent_score: self.opponent_score,
            questions_answered: self.questions_answered,
            correct_answers: self.correct_answers,
            total_questions: self.questions.len(),
            accuracy,
            quiz_duration_secs: self.quiz_duration_secs,
            formatted_duration: format_duration(self.quiz_duration_secs),
            opponent: self.opponent.clone(),
        })
    }
}

pub fn format_duration(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
