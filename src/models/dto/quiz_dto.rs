use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::domain::quiz_question::{QuizOption, QuizQuestion, OPTIONS_PER_QUESTION};

/// Question shape shared by the generation endpoint and the local bank.
/// Option ids are optional and `correctOption` may be an option id, a
/// 0-based index, or a letter.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<GeneratedOption>,
    pub correct_option: CorrectOption,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
pub struct GeneratedOption {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, JsonSchema)]
#[serde(untagged)]
pub enum CorrectOption {
    Index(u64),
    Text(String),
}

impl GeneratedQuestion {
    /// Normalizes into a `QuizQuestion` with a fresh id. Returns `None` when
    /// the question does not have exactly four options or the correct option
    /// cannot be resolved to one of them.
    pub fn into_quiz_question(self) -> Option<QuizQuestion> {
        if self.question.trim().is_empty() || self.options.len() != OPTIONS_PER_QUESTION {
            return None;
        }

        let options: Vec<QuizOption> = self
            .options
            .into_iter()
            .enumerate()
            .map(|(i, opt)| QuizOption {
                id: opt
                    .id
                    .filter(|id| !id.trim().is_empty())
                    .unwrap_or_else(|| i.to_string()),
                text: opt.text,
            })
            .collect();

        let correct_option = resolve_correct_option(&self.correct_option, &options)?;

        let question = QuizQuestion {
            id: Uuid::new_v4().to_string(),
            question: self.question,
            options,
            correct_option,
            explanation: self.explanation.filter(|e| !e.trim().is_empty()),
        };

        question.validate().ok().map(|_| question)
    }
}

fn resolve_correct_option(raw: &CorrectOption, options: &[QuizOption]) -> Option<String> {
    let text = match raw {
        CorrectOption::Index(i) => {
            return options.get(*i as usize).map(|o| o.id.clone());
        }
        CorrectOption::Text(text) => text.trim(),
    };

    if let Some(option) = options.iter().find(|o| o.id == text) {
        return Some(option.id.clone());
    }

    if let Ok(index) = text.parse::<usize>() {
        return options.get(index).map(|o| o.id.clone());
    }

    let mut chars = text.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), None) if letter.is_ascii_alphabetic() => {
            let index = (letter.to_ascii_uppercase() as u8 - b'A') as usize;
            options.get(index).map(|o| o.id.clone())
        }
        _ => None,
    }
}
