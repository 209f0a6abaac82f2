use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    chatbot_handler, diabetes_handler, health_handler, heart_handler, home_handler,
    kidney_handler, liver_handler, process_speech_handler,
};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let body_limit = DefaultBodyLimit::max(state.max_upload_bytes);

    Router::new()
        .route("/", get(home_handler))
        .route("/health", get(health_handler))
        .route("/api/kidney", post(kidney_handler))
        .route("/api/liver", post(liver_handler))
        .route("/api/heart", post(heart_handler))
        .route("/api/diabetes", post(diabetes_handler))
        .route("/api/process-speech", post(process_speech_handler))
        .route("/api/chatbot", post(chatbot_handler))
        .layer(body_limit)
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
