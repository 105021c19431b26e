use crate::{models::dto::quiz_dto::GeneratedQuestion, services::question_service::QuizParameters};

pub const QUIZ_GENERATOR_SYSTEM_PROMPT: &str =
    "You are a quiz question generator specialized in creating educational content. Output only valid JSON.";

/// Builds the user prompt for a batch of multiple-choice questions, embedding
/// the JSON schema the response must follow.
pub fn build_question_prompt(params: &QuizParameters) -> String {
    let schema = schemars::schema_for!(Vec<GeneratedQuestion>);
    let schema_json = serde_json::to_string_pretty(&schema).unwrap_or_default();

    format!(
        "Generate {count} {difficulty} difficulty multiple choice quiz questions about {topic} in {subject} ({domain}).
Each question should have exactly 4 options with one correct answer.
Format your response as a valid JSON array of objects with the following structure:
[
  {{
    \"question\": \"Question text here?\",
    \"options\": [
      {{\"text\": \"Option A\"}},
      {{\"text\": \"Option B\"}},
      {{\"text\": \"Option C\"}},
      {{\"text\": \"Option D\"}}
    ],
    \"correctOption\": \"0, 1, 2, or 3 (index of correct option)\",
    \"explanation\": \"Optional explanation of the correct answer\"
  }}
]
The response must validate against this JSON schema:
{schema}",
        count = params.number_of_questions,
        difficulty = params.difficulty,
        topic = humanize(&params.topic),
        subject = humanize(&params.subject),
        domain = humanize(&params.domain),
        schema = schema_json,
    )
}

/// `deep_learning` -> `deep learning`
pub fn humanize(key: &str) -> String {
    key.replace('_', " ")
}
