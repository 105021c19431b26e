use actix_web::{get, web, HttpResponse};

use crate::app_state::AppState;

#[get("/health")]
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let active_sessions = state.quiz_service.session_count().await;

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "activeSessions": active_sessions,
        "questionGeneration": if state.config.llm_enabled() { "llm" } else { "local" }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use actix_web::{test, App};

    #[actix_web::test]
    async fn test_health_check() {
        let state = AppState::new(Config::test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["questionGeneration"], "local");
        assert_eq!(body["activeSessions"], 0);
    }
}
