pub mod career_catalog;
pub mod question_bank;
pub mod quiz_prompt;
pub mod taxonomy;
