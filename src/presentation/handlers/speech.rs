use axum::Json;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::DispatchError;
use crate::infrastructure::observability::sanitize_prompt;
use crate::presentation::error::{bad_request, error_response};
use crate::presentation::state::AppState;

pub const AUDIO_FIELD: &str = "audio";

#[derive(Serialize)]
pub struct SpeechResponse {
    pub recognized_text: String,
    pub suggested_medicines: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn process_speech_handler(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let multipart = match multipart {
        Ok(m) => m,
        Err(rejection) => {
            tracing::warn!(error = %rejection, "Speech request is not multipart");
            return bad_request("No audio file provided");
        }
    };

    let data = match read_audio_field(multipart).await {
        Ok(Some(data)) => data,
        Ok(None) => {
            tracing::warn!("Speech request without audio field");
            return bad_request("No audio file provided");
        }
        Err(e) if e.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(limit = state.max_upload_bytes, "Audio upload exceeds body limit");
            return error_response(StatusCode::PAYLOAD_TOO_LARGE, "Audio file too large");
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read multipart");
            return bad_request(format!("Failed to read audio file: {}", e.body_text()));
        }
    };

    tracing::debug!(bytes = data.len(), "Audio upload received");

    // The spooled file is removed before `load` returns.
    let audio = match state.wav_spool.load(data).await {
        Ok(audio) => audio,
        Err(e) => return DispatchError::from(e).into_response(),
    };

    match state.dispatcher.advise_from_speech(&audio).await {
        Ok(advice) => {
            tracing::debug!(
                transcript = %sanitize_prompt(advice.recognized_text.as_str()),
                "Speech transcribed"
            );
            (
                StatusCode::OK,
                Json(SpeechResponse {
                    recognized_text: advice.recognized_text.into_inner(),
                    suggested_medicines: advice.suggested_medicines,
                }),
            )
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}

/// Bytes of the first `audio` field; other fields are skipped.
async fn read_audio_field(mut multipart: Multipart) -> Result<Option<Vec<u8>>, MultipartError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(AUDIO_FIELD) {
            continue;
        }
        let data = field.bytes().await?;
        return Ok(Some(data.to_vec()));
    }
    Ok(None)
}
