use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{CompletionError, TranscriptionError};
use crate::application::services::{DispatchError, Outcome};

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            fields: None,
            details: None,
        }
    }
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ErrorResponse::new(message))).into_response()
}

/// Client-side mistakes caught before any component runs.
pub fn bad_request(message: impl Into<String>) -> Response {
    error_response(StatusCode::BAD_REQUEST, message)
}

impl IntoResponse for DispatchError {
    fn into_response(self) -> Response {
        if self.outcome() == Outcome::ClientFault {
            tracing::warn!(error = %self, "Request rejected");
            let body = match &self {
                DispatchError::Validation(e) => {
                    let fields = e.fields();
                    ErrorResponse {
                        error: e.to_string(),
                        fields: (!fields.is_empty())
                            .then(|| fields.into_iter().map(String::from).collect()),
                        details: None,
                    }
                }
                other => ErrorResponse::new(other.to_string()),
            };
            return (StatusCode::BAD_REQUEST, Json(body)).into_response();
        }

        tracing::error!(error = %self, "Request failed");

        let body = match self {
            DispatchError::Completion(CompletionError::UpstreamRejection { status, body }) => {
                let details = serde_json::from_str(&body)
                    .unwrap_or_else(|_| serde_json::Value::String(body));
                ErrorResponse {
                    error: format!("Error with completion service (status {})", status),
                    fields: None,
                    details: Some(details),
                }
            }
            DispatchError::Completion(_) => ErrorResponse::new("Completion service unavailable"),
            DispatchError::Transcription(TranscriptionError::DecodingFailed(_)) => {
                ErrorResponse::new("Could not read the uploaded audio")
            }
            DispatchError::Transcription(_) => ErrorResponse::new("Speech recognition failed"),
            DispatchError::Classification(_) | DispatchError::Validation(_) => {
                ErrorResponse::new("Diagnosis failed")
            }
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
