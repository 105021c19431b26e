use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::models::dto::quiz_dto::GeneratedQuestion;

const QUESTION_BANK_JSON: &str = include_str!("../../data/question_bank.json");

/// Pre-authored questions keyed by topic id, used when generation fails.
static QUESTION_BANK: Lazy<HashMap<String, Vec<GeneratedQuestion>>> = Lazy::new(|| {
    serde_json::from_str(QUESTION_BANK_JSON).unwrap_or_else(|err| {
        log::error!("Embedded question bank is malformed: {}", err);
        HashMap::new()
    })
});

pub fn bank_questions(topic: &str) -> Option<&'static [GeneratedQuestion]> {
    QUESTION_BANK
        .get(topic)
        .map(Vec::as_slice)
        .filter(|questions| !questions.is_empty())
}

pub fn bank_topics() -> Vec<&'static str> {
    let mut topics: Vec<&'static str> = QUESTION_BANK.keys().map(String::as_str).collect();
    topics.sort_unstable();
    topics
}
