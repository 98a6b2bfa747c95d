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
pub struct ChatRequest {
    #[serde(default)]
    message: String,

    #[serde(default)]
    context: String,
}

#[instrument(skip(state, body))]
pub async fn handler(State(state): State<AppState>, body: Bytes) -> impl IntoResponse {
    let Some(generator) = state.generator() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "Gemini not configured", "success": false })),
        );
    };

    // A missing or unparseable body counts as an empty request, so the
    // validation error below keeps the JSON envelope shape.
    let request: ChatRequest = serde_json::from_slice(&body).unwrap_or_default();

    let message = request.message.trim();
    if message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "Message is required", "success": false })),
        );
    }

    let prompt = build_prompt(message, TaskType::parse(&request.context));

    match generator.generate(&prompt).await {
        Ok(text) => (
            StatusCode::OK,
            Json(json!({ "response": text, "success": true })),
        ),
        Err(GenerateError::Empty) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": "No response generated", "success": false })),
        ),
        Err(e) => {
            tracing::error!("failed to complete chat: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Gemini request failed", "success": false })),
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::runtime::Runtime;

    use super::*;
    use crate::gemini::testing::{FailingText, FixedText, NoText, RecordingText};
    use crate::handlers::testing::{body_json, configured, unconfigured};

    #[test]
    fn unconfigured_adapter_is_reported_before_validation() {
        let rt = Runtime::new().unwrap();

        let response = rt
            .block_on(handler(
                State(unconfigured()),
                Bytes::from_static(br#"{"message": "hello"}"#),
            ))
            .into_response();

        assert_eq!(response.status(), 500);
        let body = rt.block_on(body_json(response));
        assert_eq!(body["error"], "Gemini not configured");
        assert_eq!(body["success"], false);
    }

    #[test]
    fn missing_body_is_rejected_with_validation_error() {
        let rt = Runtime::new().unwrap();

        let response = rt
            .block_on(handler(State(configured(FixedText("unused"))), Bytes::new()))
            .into_response();

        assert_eq!(response.status(), 400);
        let body = rt.block_on(body_json(response));
        assert_eq!(body["error"], "Message is required");
        assert_eq!(body["success"], false);
    }

    #[test]
    fn empty_object_body_is_rejected_with_validation_error() {
        let rt = Runtime::new().unwrap();

        let response = rt
            .block_on(handler(
                State(configured(FixedText("unused"))),
                Bytes::from_static(b"{}"),
            ))
            .into_response();

        assert_eq!(response.status(), 400);
        let body = rt.block_on(body_json(response));
        assert_eq!(body["error"], "Message is required");
    }

    #[test]
    fn whitespace_only_message_is_rejected() {
        let rt = Runtime::new().unwrap();

        let response = rt
            .block_on(handler(
                State(configured(FixedText("unused"))),
                Bytes::from_static(br#"{"message": "   "}"#),
            ))
            .into_response();

        assert_eq!(response.status(), 400);
        let body = rt.block_on(body_json(response));
        assert_eq!(body["error"], "Message is required");
    }

    #[test]
    fn successful_generation_returns_the_response_envelope() {
        let rt = Runtime::new().unwrap();

        let response = rt
            .block_on(handler(
                State(configured(FixedText("Focus on the no-show rate."))),
                Bytes::from_static(br#"{"message": "What should we fix first?"}"#),
            ))
            .into_response();

        assert_eq!(response.status(), 200);
        let body = rt.block_on(body_json(response));
        assert_eq!(body["response"], "Focus on the no-show rate.");
        assert_eq!(body["success"], true);
    }

    #[test]
    fn unknown_context_value_uses_the_general_template() {
        let rt = Runtime::new().unwrap();
        let generator = RecordingText::new("ok");
        let last_prompt = generator.last_prompt.clone();

        rt.block_on(handler(
            State(configured(generator)),
            Bytes::from_static(br#"{"message": "hello", "context": "not-a-real-task"}"#),
        ));

        let prompt = last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("### User Question:"));
    }

    #[test]
    fn consultation_context_selects_the_consultation_template() {
        let rt = Runtime::new().unwrap();
        let generator = RecordingText::new("ok");
        let last_prompt = generator.last_prompt.clone();

        rt.block_on(handler(
            State(configured(generator)),
            Bytes::from_static(br#"{"message": "hello", "context": "consultation"}"#),
        ));

        let prompt = last_prompt.lock().unwrap().clone().unwrap();
        assert!(prompt.contains("### Consultation Request:"));
    }

    #[test]
    fn empty_model_text_maps_to_no_response_generated() {
        let rt = Runtime::new().unwrap();

        let response = rt
            .block_on(handler(
                State(configured(NoText)),
                Bytes::from_static(br#"{"message": "hello"}"#),
            ))
            .into_response();

        assert_eq!(response.status(), 500);
        let body = rt.block_on(body_json(response));
        assert_eq!(body["error"], "No response generated");
    }

    #[test]
    fn transport_failure_maps_to_a_structured_error() {
        let rt = Runtime::new().unwrap();

        let response = rt
            .block_on(handler(
                State(configured(FailingText)),
                Bytes::from_static(br#"{"message": "hello"}"#),
            ))
            .into_response();

        assert_eq!(response.status(), 500);
        let body = rt.block_on(body_json(response));
        assert_eq!(body["error"], "Gemini request failed");
        assert_eq!(body["success"], false);
    }
}
