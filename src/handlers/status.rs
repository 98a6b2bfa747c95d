use axum::extract::State;
use axum::{response::IntoResponse, Json};
use serde_json::json;
use tracing::instrument;

use crate::state::AppState;

/// Reports the key-presence and client-construction checks separately;
/// in practice the two booleans always agree.
#[instrument(skip(state))]
pub async fn handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(json!({
        "configured": state.configured(),
        "ready": state.ready(),
        "success": true,
    }))
}
