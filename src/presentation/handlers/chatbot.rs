use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::domain::ChatMessage;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::error::bad_request;
use crate::presentation::state::AppState;

#[derive(Deserialize)]
pub struct ChatbotRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatbotResponse {
    pub reply: String,
}

pub async fn chatbot_handler(
    State(state): State<AppState>,
    request: Result<Json<ChatbotRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match request {
        Ok(r) => r,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Unreadable chatbot payload");
            return bad_request(format!("Invalid JSON body: {}", rejection.body_text()));
        }
    };

    tracing::debug!(message = %sanitize_prompt(&request.message), "Chat message received");

    let reply = state.dispatcher.chat(&ChatMessage::new(request.message));

    (StatusCode::OK, Json(ChatbotResponse { reply })).into_response()
}
