use actix_web::{delete, get, post, web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::{
    app_state::AppState,
    constants::taxonomy::QUIZ_DOMAINS,
    errors::AppError,
    models::dto::{
        request::{AnswerRequest, StartQuizRequest},
        response::QuizCatalogResponse,
    },
};

#[get("/api/quiz/catalog")]
pub async fn get_catalog() -> HttpResponse {
    HttpResponse::Ok().json(QuizCatalogResponse::new(QUIZ_DOMAINS))
}

#[post("/api/quiz/sessions")]
pub async fn create_session(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.create_session().await;
    Ok(HttpResponse::Created().json(session))
}

#[get("/api/quiz/sessions/{id}")]
pub async fn get_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.get_session(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/api/quiz/sessions/{id}/start")]
pub async fn start_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<StartQuizRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state
        .quiz_service
        .start_quiz(&id, request.into_settings())
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/quiz/sessions/{id}/answer")]
pub async fn answer_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
    request: web::Json<AnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let request = request.into_inner();
    request.validate()?;

    let response = state
        .quiz_service
        .answer_question(&id, request.option_id)
        .await?;
    Ok(HttpResponse::Ok().json(response))
}

#[post("/api/quiz/sessions/{id}/next")]
pub async fn next_question(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.next_question(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[post("/api/quiz/sessions/{id}/reset")]
pub async fn reset_quiz(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let session = state.quiz_service.reset_quiz(&id).await?;
    Ok(HttpResponse::Ok().json(session))
}

#[get("/api/quiz/sessions/{id}/results")]
pub async fn get_results(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let results = state.quiz_service.results(&id).await?;
    Ok(HttpResponse::Ok().json(results))
}

#[delete("/api/quiz/sessions/{id}")]
pub async fn end_session(
    state: web::Data<AppState>,
    id: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    state.quiz_service.end_session(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{
        config::Config,
        handlers::configure,
        services::model_service::{MockQuestionGenerator, ModelError},
        test_utils::{
            fixtures,
            test_helpers::{assert_error_status, assert_success_status},
        },
    };

    use super::*;

    fn state_with_model_output(output: Option<String>) -> AppState {
        let mut generator = MockQuestionGenerator::new();
        generator
            .expect_generate_questions()
            .returning(move |_| output.clone().ok_or(ModelError::EmptyContent));
        AppState::with_generator(Config::test_config(), Arc::new(generator))
    }

    async fn new_session(state: &AppState) -> Uuid {
        state.quiz_service.create_session().await.id
    }

    #[actix_web::test]
    async fn test_catalog_lists_domains() {
        let app = test::init_service(App::new().service(get_catalog)).await;

        let req = test::TestRequest::get().uri("/api/quiz/catalog").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["domains"][0]["id"], "ai");
        assert_eq!(body["difficulties"][1]["timeLimitSecs"], 25);
    }

    #[actix_web::test]
    async fn test_start_uses_generated_questions() {
        let state = state_with_model_output(Some(fixtures::generated_questions_json(5)));
        let id = new_session(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/quiz/sessions/{}/start", id))
            .set_json(fixtures::start_request("easy"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["questionOrigin"], "generated");
        assert_eq!(body["session"]["stage"], "battle");
        assert_eq!(body["session"]["currentQuestion"]["question"], "Generated question 1?");
        assert!(body["session"]["currentQuestion"].get("correctOption").is_none());
    }

    #[actix_web::test]
    async fn test_answer_with_null_option_times_out() {
        let state = state_with_model_output(None);
        let id = new_session(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/quiz/sessions/{}/start", id))
            .set_json(fixtures::start_request("medium"))
            .to_request();
        assert_success_status(test::call_service(&app, req).await.status());

        let req = test::TestRequest::post()
            .uri(&format!("/api/quiz/sessions/{}/answer", id))
            .set_json(json!({ "optionId": null }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["correct"], false);
        assert_eq!(body["timedOut"], true);
        assert_eq!(body["session"]["questionsAnswered"], 1);
    }

    #[actix_web::test]
    async fn test_start_with_unknown_topic_is_bad_request() {
        let state = state_with_model_output(None);
        let id = new_session(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/quiz/sessions/{}/start", id))
            .set_json(json!({
                "domain": "ai",
                "subject": "deep_learning",
                "topic": "alchemy",
                "difficulty": "easy"
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "VALIDATION_ERROR");
    }

    #[actix_web::test]
    async fn test_next_in_lobby_is_conflict() {
        let state = state_with_model_output(None);
        let id = new_session(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri(&format!("/api/quiz/sessions/{}/next", id))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }

    #[actix_web::test]
    async fn test_unknown_session_is_not_found() {
        let state = state_with_model_output(None);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/quiz/sessions/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_end_session_then_get_fails() {
        let state = state_with_model_output(None);
        let id = new_session(&state).await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/quiz/sessions/{}", id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/quiz/sessions/{}", id))
            .to_request();
        assert_error_status(test::call_service(&app, req).await.status());
    }
}
