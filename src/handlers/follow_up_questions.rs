use axum::extract::State;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::instrument;

use crate::gemini::GenerateError;
use crate::prompts::{build_prompt, TaskType};
use crate::state::AppState;

#[instrument(skip(state))]
pub async fn handler(State(state): State<AppState>) -> impl IntoResponse {
    let Some(generator) = state.generator() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Gemini not configured", "success": false })),
        );
    };

    let prompt = build_prompt("", TaskType::FollowUpQuestions);

    match generator.generate(&prompt).await {
        Ok(text) => (
            StatusCode::OK,
            Json(json!({ "questions": split_questions(&text), "success": true })),
        ),
        Err(GenerateError::Empty) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "No questions generated", "success": false })),
        ),
        Err(e) => {
            tracing::error!("failed to generate follow-up questions: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Gemini request failed", "success": false })),
            )
        }
    }
}

/// Model output arrives one question per line; keep the first three
/// non-blank lines.
fn split_questions(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .take(3)
        .map(str::to_string)
        .collect()
}
