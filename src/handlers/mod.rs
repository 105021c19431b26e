pub mod career_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod resume_handler;

use actix_web::web;

use crate::errors::AppError;

pub use career_handler::{clear_interactions, get_career_suggestions, record_interaction};
pub use health_handler::health_check;
pub use quiz_handler::{
    answer_question, create_session, end_session, get_catalog, get_results, get_session,
    next_question, reset_quiz, start_quiz,
};
pub use resume_handler::{create_resume, delete_resume, get_all_resumes, get_resume, update_resume};

/// Registers every route on an app or scope.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default()
        .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into());

    cfg.app_data(json_config)
        .service(health_check)
        .service(get_catalog)
        .service(create_session)
        .service(get_session)
        .service(start_quiz)
        .service(answer_question)
        .service(next_question)
        .service(reset_quiz)
        .service(get_results)
        .service(end_session)
        .service(record_interaction)
        .service(clear_interactions)
        .service(get_career_suggestions)
        .service(create_resume)
        .service(get_all_resumes)
        .service(get_resume)
        .service(update_resume)
        .service(delete_resume);
}
