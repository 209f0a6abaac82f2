use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;

use crate::domain::DiagnosticDomain;
use crate::presentation::error::bad_request;
use crate::presentation::state::AppState;

#[derive(Serialize)]
pub struct DiagnosisResponse {
    pub result: u8,
    pub disease: String,
}

pub async fn kidney_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    diagnose(&state, DiagnosticDomain::Kidney, payload)
}

pub async fn liver_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    diagnose(&state, DiagnosticDomain::Liver, payload)
}

pub async fn heart_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    diagnose(&state, DiagnosticDomain::Heart, payload)
}

pub async fn diabetes_handler(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    diagnose(&state, DiagnosticDomain::Diabetes, payload)
}

fn diagnose(
    state: &AppState,
    domain: DiagnosticDomain,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let Json(payload) = match payload {
        Ok(p) => p,
        Err(rejection) => {
            tracing::warn!(domain = %domain, error = %rejection, "Unreadable diagnosis payload");
            return bad_request(format!("Invalid JSON body: {}", rejection.body_text()));
        }
    };

    match state.dispatcher.diagnose(domain, &payload) {
        Ok(result) => (
            StatusCode::OK,
            Json(DiagnosisResponse {
                result: result.label.as_u8(),
                disease: result.disease,
            }),
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}
