use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::{
    constants::taxonomy::DomainEntry,
    models::domain::{
        AnswerVerdict, CareerDomain, CareerPath, Difficulty, Opponent, QuizOption, QuizQuestion,
        QuizSessionState, QuizSettings, QuizStage,
    },
    services::question_service::QuestionOrigin,
};

/// A question as shown during battle, without its answer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionView {
    pub id: String,
    pub question: String,
    pub options: Vec<QuizOption>,
}

impl From<&QuizQuestion> for QuestionView {
    fn from(question: &QuizQuestion) -> Self {
        QuestionView {
            id: question.id.clone(),
            question: question.question.clone(),
            options: question.options.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSessionView {
    pub id: Uuid,
    pub stage: QuizStage,
    pub settings: Option<QuizSettings>,
    pub current_question_index: usize,
    pub total_questions: usize,
    pub current_question: Option<QuestionView>,
    pub current_answered: bool,
    pub time_limit_secs: Option<u32>,
    pub player_score: u32,
    pub opponent_score: u32,
    pub opponent: Option<Opponent>,
    pub questions_answered: u32,
    pub correct_answers: u32,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub quiz_duration_secs: u64,
}

impl QuizSessionView {
    pub fn from_state(id: Uuid, state: &QuizSessionState) -> Self {
        let current_question = match state.stage {
            QuizStage::Battle => state.current_question().map(QuestionView::from),
            _ => None,
        };

        QuizSessionView {
            id,
            stage: state.stage,
            settings: state.settings.clone(),
            current_question_index: state.current_question_index,
            total_questions: state.questions.len(),
            current_question,
            current_answered: state.current_answered,
            time_limit_secs: state.settings.as_ref().map(|s| s.difficulty.time_limit_secs()),
            player_score: state.player_score,
            opponent_score: state.opponent_score,
            opponent: state.opponent.clone(),
            questions_answered: state.questions_answered,
            correct_answers: state.correct_answers,
            started_at: state.started_at,
            ended_at: state.ended_at,
            quiz_duration_secs: state.quiz_duration_secs,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StartQuizResponse {
    pub session: QuizSessionView,
    pub match_id: Uuid,
    pub question_origin: QuestionOrigin,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerResponse {
    #[serde(flatten)]
    pub verdict: AnswerVerdict,
    pub session: QuizSessionView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyView {
    pub id: Difficulty,
    pub questions: usize,
    pub time_limit_secs: u32,
}

#[derive(Debug, Serialize)]
pub struct QuizCatalogResponse {
    pub domains: &'static [DomainEntry],
    pub difficulties: Vec<DifficultyView>,
}

impl QuizCatalogResponse {
    pub fn new(domains: &'static [DomainEntry]) -> Self {
        QuizCatalogResponse {
            domains,
            difficulties: Difficulty::ALL
                .iter()
                .map(|d| DifficultyView {
                    id: *d,
                    questions: d.question_count(),
                    time_limit_secs: d.time_limit_secs(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerSuggestionResponse {
    pub domains: Vec<CareerDomain>,
    pub careers: Vec<CareerPath>,
    pub queries_considered: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct InteractionsResponse {
    pub queries: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::domain::OpponentType, test_utils::fixtures};

    fn battle_state() -> QuizSessionState {
        let mut state = QuizSessionState::new();
        let question = fixtures::sample_question("1");
        state
            .begin(
                QuizSettings::new(
                    "cs",
                    "os",
                    "memory_management",
                    Difficulty::Medium,
                    OpponentType::Ai,
                ),
                vec![question],
                Opponent::ai("ThinkTank", 6),
                Utc::now(),
            )
            .expect("begin should succeed");
        state
    }

    #[test]
    fn session_view_hides_the_correct_option() {
        let view = QuizSessionView::from_state(Uuid::new_v4(), &battle_state());
        let json = serde_json::to_value(&view).expect("view should serialize");

        assert_eq!(json["stage"], "battle");
        assert_eq!(json["timeLimitSecs"], 25);
        assert_eq!(json["currentQuestion"]["question"], "Which layer reduces spatial dimensions?");
        assert!(json["currentQuestion"].get("correctOption").is_none());
    }

    #[test]
    fn lobby_view_has_no_current_question() {
        let view = QuizSessionView::from_state(Uuid::new_v4(), &QuizSessionState::new());

        assert_eq!(view.stage, QuizStage::Lobby);
        assert!(view.current_question.is_none());
        assert!(view.time_limit_secs.is_none());
    }

    #[test]
    fn catalog_lists_every_difficulty() {
        let catalog = QuizCatalogResponse::new(crate::constants::taxonomy::QUIZ_DOMAINS);

        assert_eq!(catalog.difficulties.len(), 4);
        assert_eq!(catalog.difficulties[3].questions, 15);
    }
}
