use async_openai::{config::OpenAIConfig, error::OpenAIError, Client};
use async_trait::async_trait;
use secrecy::ExposeSecret;
use serde_json::{json, Value};
use thiserror::Error;

use crate::{
    config::Config,
    constants::quiz_prompt::{build_question_prompt, QUIZ_GENERATOR_SYSTEM_PROMPT},
    services::question_service::QuizParameters,
};

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("no LLM API key configured")]
    Disabled,

    #[error("LLM request failed: {0}")]
    Api(#[from] OpenAIError),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("failed to parse generated questions: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("expected {expected} valid questions, got {valid}")]
    Incomplete { expected: usize, valid: usize },
}

/// Source of raw generated question text. The response is expected to be a
/// JSON array, possibly wrapped in code fences.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate_questions(&self, params: &QuizParameters) -> Result<String, ModelError>;
}

/// Chat-completion backed generator for any OpenAI-compatible endpoint.
pub struct OpenAiModelService {
    client: Client<OpenAIConfig>,
    model: String,
    temperature: f32,
    max_tokens: u32,
    enabled: bool,
}

impl OpenAiModelService {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_base(config.llm_api_base.clone())
            .with_api_key(config.llm_api_key.expose_secret().to_string());

        Self {
            client: Client::with_config(openai_config),
            model: config.llm_model.clone(),
            temperature: config.llm_temperature,
            max_tokens: config.llm_max_tokens,
            enabled: config.llm_enabled(),
        }
    }

    fn completion_request(&self, params: &QuizParameters) -> Value {
        json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": QUIZ_GENERATOR_SYSTEM_PROMPT },
                { "role": "user", "content": build_question_prompt(params) }
            ],
            "temperature": self.temperature,
            "max_tokens": self.max_tokens
        })
    }
}

#[async_trait]
impl QuestionGenerator for OpenAiModelService {
    async fn generate_questions(&self, params: &QuizParameters) -> Result<String, ModelError> {
        if !self.enabled {
            return Err(ModelError::Disabled);
        }

        log::debug!(
            "Requesting {} {} questions for topic '{}' from model {}",
            params.number_of_questions,
            params.difficulty,
            params.topic,
            self.model
        );

        let response: Value = self
            .client
            .chat()
            .create_byot(self.completion_request(params))
            .await?;

        message_content(&response)
            .map(str::to_string)
            .ok_or(ModelError::EmptyContent)
    }
}

/// `choices[0].message.content` of a chat completion, if non-empty.
fn message_content(response: &Value) -> Option<&str> {
    response
        .pointer("/choices/0/message/content")
        .and_then(Value::as_str)
        .filter(|content| !content.trim().is_empty())
}
