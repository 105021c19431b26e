use actix_web::{delete, get, post, web, HttpResponse};

use crate::{
    app_state::AppState,
    errors::AppError,
    models::dto::{
        request::RecordInteractionRequest,
        response::{CareerSuggestionResponse, InteractionsResponse},
    },
};

#[post("/api/interactions/{client_id}")]
pub async fn record_interaction(
    state: web::Data<AppState>,
    client_id: web::Path<String>,
    request: web::Json<RecordInteractionRequest>,
) -> Result<HttpResponse, AppError> {
    let queries = state
        .interaction_service
        .record(&client_id, request.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(InteractionsResponse { queries }))
}

#[delete("/api/interactions/{client_id}")]
pub async fn clear_interactions(
    state: web::Data<AppState>,
    client_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.interaction_service.clear(&client_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

#[get("/api/careers/suggestions/{client_id}")]
pub async fn get_career_suggestions(
    state: web::Data<AppState>,
    client_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let queries = state.interaction_service.recent(&client_id).await?;
    let (domains, careers) = state.career_suggestor.suggest_for_queries(&queries);

    Ok(HttpResponse::Ok().json(CareerSuggestionResponse {
        domains,
        careers,
        queries_considered: queries.len(),
    }))
}
