use std::sync::Arc;

use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::Serialize;
use uuid::Uuid;

use crate::{
    constants::{question_bank::bank_questions, quiz_prompt::humanize},
    models::{
        domain::{Difficulty, QuizOption, QuizQuestion, QuizSettings},
        dto::quiz_dto::GeneratedQuestion,
    },
    services::model_service::{ModelError, QuestionGenerator},
};

static CODE_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"```(?:json)?").expect("CODE_FENCE is a valid regex pattern"));

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizParameters {
    pub domain: String,
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub number_of_questions: usize,
}

impl From<&QuizSettings> for QuizParameters {
    fn from(settings: &QuizSettings) -> Self {
        Self {
            domain: settings.domain.clone(),
            subject: settings.subject.clone(),
            topic: settings.topic.clone(),
            difficulty: settings.difficulty,
            number_of_questions: settings.number_of_questions,
        }
    }
}

/// Which path produced a question set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionOrigin {
    Generated,
    Bank,
    Synthesized,
}

#[derive(Clone, Debug)]
pub struct QuestionSet {
    pub questions: Vec<QuizQuestion>,
    pub origin: QuestionOrigin,
}

pub struct QuestionService {
    generator: Arc<dyn QuestionGenerator>,
}

impl QuestionService {
    pub fn new(generator: Arc<dyn QuestionGenerator>) -> Self {
        Self { generator }
    }

    /// Always returns `number_of_questions` questions: generated ones when the
    /// model answers with enough valid questions, otherwise the local bank
    /// topped up with placeholders.
    pub async fn get_questions(&self, params: &QuizParameters) -> QuestionSet {
        match self.generate(params).await {
            Ok(questions) => {
                log::info!(
                    "Generated {} questions for topic '{}'",
                    questions.len(),
                    params.topic
                );
                QuestionSet {
                    questions,
                    origin: QuestionOrigin::Generated,
                }
            }
            Err(err) => {
                log::warn!(
                    "Question generation failed for topic '{}', falling back to local bank: {}",
                    params.topic,
                    err
                );
                fallback_questions(params)
            }
        }
    }

    async fn generate(&self, params: &QuizParameters) -> Result<Vec<QuizQuestion>, ModelError> {
        let text = self.generator.generate_questions(params).await?;
        parse_generated_questions(&text, params.number_of_questions)
    }
}

pub fn strip_code_fences(text: &str) -> String {
    CODE_FENCE.replace_all(text, "").trim().to_string()
}

/// Parses a generated batch. The batch is rejected unless it holds at least
/// `count` valid questions; extra questions are dropped.
pub fn parse_generated_questions(
    text: &str,
    count: usize,
) -> Result<Vec<QuizQuestion>, ModelError> {
    let raw: Vec<GeneratedQuestion> = serde_json::from_str(&strip_code_fences(text))?;

    let questions: Vec<QuizQuestion> = raw
        .into_iter()
        .filter_map(GeneratedQuestion::into_quiz_question)
        .take(count)
        .collect();

    if questions.len() < count || questions.is_empty() {
        return Err(ModelError::Incomplete {
            expected: count,
            valid: questions.len(),
        });
    }

    Ok(questions)
}

pub fn fallback_questions(params: &QuizParameters) -> QuestionSet {
    let count = params.number_of_questions;

    let Some(bank) = bank_questions(&params.topic) else {
        return QuestionSet {
            questions: synthesize_questions(params, 0, count),
            origin: QuestionOrigin::Synthesized,
        };
    };

    let mut questions: Vec<QuizQuestion> = bank
        .iter()
        .cloned()
        .filter_map(GeneratedQuestion::into_quiz_question)
        .take(count)
        .collect();

    if questions.len() < count {
        log::debug!(
            "Bank holds {} questions for '{}', synthesizing {} more",
            questions.len(),
            params.topic,
            count - questions.len()
        );
        let start = questions.len();
        questions.extend(synthesize_questions(params, start, count - start));
    }

    QuestionSet {
        questions,
        origin: QuestionOrigin::Bank,
    }
}

/// Placeholder questions with a uniformly random correct option. Numbering
/// starts after `offset` so top-ups continue the bank's sequence.
pub fn synthesize_questions(
    params: &QuizParameters,
    offset: usize,
    count: usize,
) -> Vec<QuizQuestion> {
    let topic = humanize(&params.topic);
    let subject = humanize(&params.subject);
    let mut rng = rand::thread_rng();

    (offset + 1..=offset + count)
        .map(|n| QuizQuestion {
            id: Uuid::new_v4().to_string(),
            question: format!("Sample question {} about {} in {}?", n, topic, subject),
            options: ["A", "B", "C", "D"]
                .iter()
                .enumerate()
                .map(|(i, letter)| {
                    QuizOption::new(i.to_string(), format!("Option {} for question {}", letter, n))
                })
                .collect(),
            correct_option: rng.gen_range(0..4).to_string(),
            explanation: None,
        })
        .collect()
}
