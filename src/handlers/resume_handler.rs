use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::request::{CreateResumeRequest, UpdateResumeRequest},
};

#[post("/api/resumes")]
pub async fn create_resume(
    state: web::Data<AppState>,
    request: web::Json<CreateResumeRequest>,
) -> Result<HttpResponse, AppError> {
    let resume = state.resume_service.create_resume(request.into_inner()).await?;
    Ok(HttpResponse::Created().json(resume))
}

#[get("/api/resumes")]
pub async fn get_all_resumes(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let resumes = state.resume_service.get_all_resumes().await?;
    Ok(HttpResponse::Ok().json(resumes))
}

#[get("/api/resumes/{id}")]
pub async fn get_resume(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let resume = state.resume_service.get_resume(&id).await?;
    Ok(HttpResponse::Ok().json(resume))
}

#[put("/api/resumes/{id}")]
pub async fn update_resume(
    state: web::Data<AppState>,
    id: web::Path<String>,
    request: web::Json<UpdateResumeRequest>,
) -> Result<HttpResponse, AppError> {
    let resume = state
        .resume_service
        .update_resume(&id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(resume))
}

#[delete("/api/resumes/{id}")]
pub async fn delete_resume(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.resume_service.delete_resume(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};
    use serde_json::{json, Value};

    use crate::{config::Config, handlers::configure};

    use super::*;

    #[actix_web::test]
    async fn test_resume_lifecycle() {
        let state = AppState::new(Config::test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/resumes")
            .set_json(json!({ "careerPathId": "cloud-architect" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let created: Value = test::read_body_json(resp).await;
        let id = created["id"].as_str().expect("resume id").to_string();
        assert_eq!(created["careerPath"]["title"], "Cloud Architect");

        let req = test::TestRequest::put()
            .uri(&format!("/api/resumes/{}", id))
            .set_json(json!({
                "name": "Grace Hopper",
                "email": "grace@example.com",
                "skills": ["COBOL"]
            }))
            .to_request();
        let updated: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(updated["name"], "Grace Hopper");
        assert_eq!(updated["createdAt"], created["createdAt"]);

        let req = test::TestRequest::get().uri("/api/resumes").to_request();
        let listed: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(listed.as_array().map(Vec::len), Some(1));

        let req = test::TestRequest::delete()
            .uri(&format!("/api/resumes/{}", id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NO_CONTENT);

        let req = test::TestRequest::get()
            .uri(&format!("/api/resumes/{}", id))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_email_is_rejected() {
        let state = AppState::new(Config::test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::put()
            .uri("/api/resumes/some-id")
            .set_json(json!({ "email": "nope" }))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_fetched_resume_round_trips_through_put() {
        let state = AppState::new(Config::test_config());
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .configure(configure),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/resumes")
            .set_json(json!({}))
            .to_request();
        let created: Value = test::call_and_read_body_json(&app, req).await;
        let id = created["id"].as_str().expect("resume id").to_string();
        assert_eq!(created["email"], "");

        let req = test::TestRequest::put()
            .uri(&format!("/api/resumes/{}", id))
            .set_json(&created)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/resumes/{}", id))
            .to_request();
        let mut fetched: Value = test::call_and_read_body_json(&app, req).await;
        fetched["updatedAt"] = created["updatedAt"].clone();
        assert_eq!(fetched, created);
    }
}
