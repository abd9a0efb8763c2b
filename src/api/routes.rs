use axum::{
    http::{header, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use super::handlers;
use crate::openai::OpenAiClient;

pub struct AppState {
    pub openai: OpenAiClient,
}

pub fn create_router(state: Arc<AppState>, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]);

    let api_routes = Router::new()
        .route("/fortune", post(handlers::fortune))
        .route("/tts", post(handlers::tts))
        .route("/health", get(handlers::health));

    Router::new()
        .nest("/api", api_routes)
        .nest_service(
            "/",
            ServeDir::new(static_dir).append_index_html_on_directories(true),
        )
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
