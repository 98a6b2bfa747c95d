pub mod chat;
pub mod consultation;
pub mod follow_up_questions;
pub mod status;

#[cfg(test)]
pub mod testing {
    use std::sync::Arc;

    use crate::gemini::GenerateText;
    use crate::state::AppState;

    pub fn configured(generator: impl GenerateText + 'static) -> AppState {
        AppState::new(Some(Arc::new(generator)), true)
    }

    pub fn unconfigured() -> AppState {
        AppState::new(None, false)
    }

    pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        serde_json::from_slice(&bytes).expect("response body is not valid JSON")
    }
}
