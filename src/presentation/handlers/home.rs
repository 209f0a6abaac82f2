use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

pub const WELCOME_MESSAGE: &str = "Welcome to the Health API! Available endpoints: /api/kidney, /api/liver, /api/heart, /api/diabetes, /api/process-speech, /api/chatbot";

#[derive(Serialize)]
pub struct HomeResponse {
    pub message: String,
}

pub async fn home_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HomeResponse {
            message: WELCOME_MESSAGE.to_string(),
        }),
    )
}
