use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

pub const OPTIONS_PER_QUESTION: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
    pub correct_option: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct QuizOption {
    pub id: String,
    pub text: String,
}

impl QuizOption {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

impl QuizQuestion {
    pub fn is_correct(&self, option_id: &str) -> bool {
        self.correct_option == option_id
    }

    /// `correct_option` must name exactly one option, and option ids must be
    /// unique within the question.
    pub fn validate(&self) -> AppResult<()> {
        if self.options.len() != OPTIONS_PER_QUESTION {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has {} options, expected {}",
                self.id,
                self.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }

        let matches = self
            .options
            .iter()
            .filter(|o| o.id == self.correct_option)
            .count();
        if matches != 1 {
            return Err(AppError::ValidationError(format!(
                "Question '{}' correct option '{}' matches {} options",
                self.id, self.correct_option, matches
            )));
        }

        let mut ids: Vec<&str> = self.options.iter().map(|o| o.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.len() != self.options.len() {
            return Err(AppError::ValidationError(format!(
                "Question '{}' has duplicate option ids",
                self.id
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> QuizQuestion {
        QuizQuestion {
            id: "q-1".to_string(),
            question: "Which layer in a CNN performs feature extraction?".to_string(),
            options: vec![
                QuizOption::new("0", "Fully connected layer"),
                QuizOption::new("1", "Convolutional layer"),
                QuizOption::new("2", "Pooling layer"),
                QuizOption::new("3", "Normalization layer"),
            ],
            correct_option: "1".to_string(),
            explanation: None,
        }
    }

    #[test]
    fn valid_question_passes_validation() {
        assert!(sample_question().validate().is_ok());
    }

    #[test]
    fn correct_option_must_match_an_option() {
        let mut question = sample_question();
        question.correct_option = "7".to_string();

        assert!(matches!(
            question.validate(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn duplicate_option_ids_are_rejected() {
        let mut question = sample_question();
        question.options[2].id = "1".to_string();

        assert!(question.validate().is_err());
    }

    #[test]
    fn wrong_option_count_is_rejected() {
        let mut question = sample_question();
        question.options.pop();

        assert!(question.validate().is_err());
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(sample_question()).expect("question should serialize");

        assert_eq!(json["correctOption"], "1");
        assert!(json.get("explanation").is_none());
    }

    #[test]
    fn is_correct_compares_option_ids() {
        let question = sample_question();

        assert!(question.is_correct("1"));
        assert!(!question.is_correct("0"));
    }
}
