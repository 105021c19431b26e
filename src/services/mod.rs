pub mod career_service;
pub mod interaction_service;
pub mod matchmaker_service;
pub mod model_service;
pub mod opponent_model;
pub mod question_service;
pub mod quiz_session_service;
pub mod resume_service;
