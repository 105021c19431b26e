#[cfg(test)]
pub mod fixtures {
    use serde_json::{json, Value};

    use crate::models::domain::{QuizOption, QuizQuestion};

    /// Start-quiz body for the CNN topic, which has bank questions.
    pub fn start_request(difficulty: &str) -> Value {
        json!({
            "domain": "ai",
            "subject": "deep_learning",
            "topic": "cnn",
            "difficulty": difficulty,
            "opponentType": "ai"
        })
    }

    /// A fenced JSON array the way chat models tend to return it.
    pub fn generated_questions_json(count: usize) -> String {
        let questions: Vec<Value> = (1..=count)
            .map(|n| {
                json!({
                    "question": format!("Generated question {}?", n),
                    "options": [
                        { "id": "0", "text": "First" },
                        { "id": "1", "text": "Second" },
                        { "id": "2", "text": "Third" },
                        { "id": "3", "text": "Fourth" }
                    ],
                    "correctOption": (n % 4).to_string(),
                    "explanation": "Generated explanation"
                })
            })
            .collect();

        format!("```json\n{}\n```", Value::Array(questions))
    }

    pub fn sample_question(correct_option: &str) -> QuizQuestion {
        QuizQuestion {
            id: "sample".to_string(),
            question: "Which layer reduces spatial dimensions?".to_string(),
            options: vec![
                QuizOption::new("0", "Pooling"),
                QuizOption::new("1", "Dense"),
                QuizOption::new("2", "Dropout"),
                QuizOption::new("3", "Embedding"),
            ],
            correct_option: correct_option.to_string(),
            explanation: None,
        }
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use crate::services::question_service::parse_generated_questions;

    #[test]
    fn test_fixtures_generated_questions_parse() {
        let questions = parse_generated_questions(&generated_questions_json(3), 3)
            .expect("fixture should parse");
        assert_eq!(questions.len(), 3);
        assert_eq!(questions[0].correct_option, "1");
    }

    #[test]
    fn test_fixtures_sample_question_is_valid() {
        assert!(sample_question("0").validate().is_ok());
        assert!(sample_question("0").is_correct("0"));
    }

    #[test]
    fn test_fixtures_start_request_uses_bank_topic() {
        let request = start_request("easy");
        assert_eq!(request["topic"], "cnn");
        assert!(crate::constants::question_bank::bank_questions("cnn").is_some());
    }
}
