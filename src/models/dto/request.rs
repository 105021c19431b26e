use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::models::domain::{
    resume::{Certification, Education, Experience, Project},
    CareerPath, Difficulty, OpponentType, QuizSettings,
};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct StartQuizRequest {
    #[validate(length(min = 1, max = 64))]
    pub domain: String,

    #[validate(length(min = 1, max = 64))]
    pub subject: String,

    #[validate(length(min = 1, max = 64))]
    pub topic: String,

    pub difficulty: Difficulty,

    #[serde(default)]
    pub opponent_type: OpponentType,
}

impl StartQuizRequest {
    pub fn into_settings(self) -> QuizSettings {
        QuizSettings::new(
            self.domain,
            self.subject,
            self.topic,
            self.difficulty,
            self.opponent_type,
        )
    }
}

/// A missing or null `optionId` means the question timer expired.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub option_id: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RecordInteractionRequest {
    #[validate(length(min = 1, max = 500, message = "Query must be 1-500 characters"))]
    pub query: String,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateResumeRequest {
    #[serde(default)]
    #[validate(length(min = 1, max = 64))]
    pub career_path_id: Option<String>,
}

/// The full resume as the client holds it. Unknown fields such as `id` and
/// `updatedAt` are ignored, so a fetched resume can be sent back unchanged.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateResumeRequest {
    #[validate(length(max = 100))]
    pub name: String,

    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,

    #[validate(length(max = 30))]
    pub phone: String,

    #[validate(length(max = 2000))]
    pub objective: String,

    pub education: Vec<Education>,
    pub experience: Vec<Experience>,
    pub skills: Vec<String>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub career_path: Option<CareerPath>,
    pub created_at: Option<DateTime<Utc>>,
}

impl UpdateResumeRequest {
    /// A blank email means "not provided" and is not checked for format.
    pub fn normalized(mut self) -> Self {
        self.email = self.email.filter(|email| !email.trim().is_empty());
        self
    }
}
