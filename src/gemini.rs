use std::time::Duration;

use async_trait::async_trait;
use redact::Secret;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

// Bounds a hung upstream call; does not change any response shape.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Gemini request failed: {0}")]
    Request(String),

    #[error("failed to decode Gemini response: {0}")]
    Decode(String),

    #[error("Gemini returned no usable text")]
    Empty,
}

/// Port over the remote model: one prompt in, one block of text out.
///
/// Handlers depend on this trait rather than the concrete client so tests
/// can substitute a fake.
#[async_trait]
pub trait GenerateText: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Client for the Gemini `generateContent` REST endpoint.
///
/// Constructed once at startup when an API key is present; never
/// reconfigured afterwards.
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: Secret<String>,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: Secret<String>, model: String) -> Self {
        Self {
            http: reqwest::Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("failed to create http client"),
            api_key,
            model,
        }
    }

    fn request_url(&self) -> String {
        format!(
            "{GEMINI_API_BASE}/models/{}:generateContent?key={}",
            self.model,
            self.api_key.expose_secret()
        )
    }
}

#[async_trait]
impl GenerateText for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(self.request_url())
            .json(&body)
            .send()
            .await
            // The API key rides in the query string; strip the URL before
            // the error can reach a log line.
            .map_err(|e| GenerateError::Request(e.without_url().to_string()))?;

        let response = response
            .error_for_status()
            .map_err(|e| GenerateError::Request(e.without_url().to_string()))?;

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| GenerateError::Decode(e.without_url().to_string()))?;

        extract_text(&payload)
    }
}

/// First non-empty trimmed candidate part, or `Empty`.
fn extract_text(payload: &GenerateContentResponse) -> Result<String, GenerateError> {
    payload
        .candidates
        .iter()
        .flat_map(|c| c.content.parts.iter())
        .filter_map(|p| p.text.as_deref())
        .map(str::trim)
        .find(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or(GenerateError::Empty)
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Debug, Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
struct Part {
    text: String,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}
