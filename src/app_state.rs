use std::sync::Arc;

use crate::{
    config::Config,
    repositories::{InMemoryInteractionRepository, InMemoryResumeRepository},
    services::{
        career_service::CareerSuggestor,
        interaction_service::InteractionService,
        matchmaker_service::Matchmaker,
        model_service::{OpenAiModelService, QuestionGenerator},
        opponent_model::ThreadRngDice,
        question_service::QuestionService,
        quiz_session_service::QuizService,
        resume_service::ResumeService,
    },
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: Arc<QuizService>,
    pub career_suggestor: Arc<CareerSuggestor>,
    pub interaction_service: Arc<InteractionService>,
    pub resume_service: Arc<ResumeService>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let generator = Arc::new(OpenAiModelService::new(&config));
        if !config.llm_enabled() {
            log::warn!("LLM_API_KEY is not set, quizzes will use the local question bank");
        }
        Self::with_generator(config, generator)
    }

    pub fn with_generator(config: Config, generator: Arc<dyn QuestionGenerator>) -> Self {
        let question_service = Arc::new(QuestionService::new(generator));
        let matchmaker = Arc::new(Matchmaker::new(config.matchmaking_delay()));
        let quiz_service = Arc::new(
            QuizService::new(
                question_service,
                matchmaker,
                Arc::new(ThreadRngDice),
                config.opponent_answer_delay(),
            )
            .with_idle_ttl(config.session_idle_ttl()),
        );

        let interaction_service = Arc::new(InteractionService::new(Arc::new(
            InMemoryInteractionRepository::new(),
        )));
        let resume_service = Arc::new(ResumeService::new(Arc::new(
            InMemoryResumeRepository::new(),
        )));

        Self {
            quiz_service,
            career_suggestor: Arc::new(CareerSuggestor::new()),
            interaction_service,
            resume_service,
            config: Arc::new(config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_cloneable() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[tokio::test]
    async fn test_app_state_starts_without_sessions() {
        let state = AppState::new(Config::test_config());
        assert_eq!(state.quiz_service.session_count().await, 0);
        assert!(!state.config.llm_enabled());
    }
}
