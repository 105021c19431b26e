use actix_cors::Cors;
use actix_web::{http::header, middleware::Logger, web, App, HttpServer};

use thinkspark_server::{
    app_state::AppState, config::Config, handlers, middleware::RequestIdMiddleware,
};

fn cors(allowed_origin: Option<&str>) -> Cors {
    let cors = match allowed_origin {
        Some(origin) => Cors::default().allowed_origin(origin),
        None => Cors::default().allow_any_origin(),
    };

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static("x-request-id")])
        .max_age(3600)
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let bind_address = (config.web_server_host.clone(), config.web_server_port);
    let allowed_origin = config.cors_allowed_origin.clone();

    log::info!(
        "Starting ThinkSpark server on {}:{} (model {})",
        bind_address.0,
        bind_address.1,
        config.llm_model
    );

    let state = web::Data::new(AppState::new(config));
    let _sweeper = state.quiz_service.spawn_idle_sweeper();

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(RequestIdMiddleware)
            .wrap(cors(allowed_origin.as_deref()))
            .wrap(Logger::default())
            .configure(handlers::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
