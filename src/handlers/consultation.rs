use axum::body::Bytes;
use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use crate::gemini::GenerateError;
use crate::prompts::{build_prompt, TaskType};
use crate::state::AppState;

#[derive(Deserialize, Debug, Default)]
pub struct ConsultationRequest {
    #[serde(default)]
    question: String,
}

#[instrument(skip(state, body))]
pub async fn handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let Some(generator) = state.generator() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Gemini not configured", "success": false })),
        );
    };

    let request: ConsultationRequest = serde_json::from_slice(&body).unwrap_or_default();

    // An empty question becomes the default instruction inside the
    // consultation template.
    let prompt = build_prompt(request.question.trim(), TaskType::Consultation);

    match generator.generate(&prompt).await {
        Ok(text) => (
            StatusCode::OK,
            Json(json!({ "consultation": text, "success": true })),
        ),
        Err(GenerateError::Empty) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "No consultation generated", "success": false })),
        ),
        Err(e) => {
            tracing::error!("failed to generate consultation: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Gemini request failed", "success": false })),
            )
        }
    }
}
