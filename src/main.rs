/**
 * This is the main entrypoint for the `gemini_api` service.
 *
 * The service proxies chat-style questions about the meeting dashboard
 * to the Gemini API, wrapping each request in one of a small set of
 * prompt templates before forwarding it.
 */
use std::net::SocketAddr;
use std::sync::Arc;

use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tower_http::compression::CompressionLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::instrument;
use tracing_subscriber::prelude::*;

mod config;
mod context;
mod gemini;
mod handlers;
mod prompts;
mod state;

#[tokio::main]
async fn main() -> Result<(), axum::BoxError> {
    dotenvy::dotenv().ok();

    init_tracer();

    let config = config::load_config().expect("failed to load config");

    let addr = SocketAddr::from((config.host, config.port));

    let state = match config.gemini_api_key {
        Some(key) => state::AppState::new(
            Some(Arc::new(gemini::GeminiClient::new(
                key,
                config.gemini_model,
            ))),
            true,
        ),
        None => {
            tracing::warn!("GEMINI_API_KEY not set, generation endpoints are disabled");

            state::AppState::new(None, false)
        }
    };

    let app = app(state);

    tracing::debug!("listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn init_tracer() {
    let fmt_layer = tracing_subscriber::fmt::layer();

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn app(state: state::AppState) -> Router {
    Router::new()
        .nest(
            "/api/gemini",
            Router::new()
                .route("/chat", post(handlers::chat::handler))
                .route("/consultation", post(handlers::consultation::handler))
                .route(
                    "/follow-up-questions",
                    post(handlers::follow_up_questions::handler),
                )
                .route("/status", get(handlers::status::handler)),
        )
        .route("/", get(root))
        .route("/health", get(health))
        .with_state(state)
        // The dashboard frontend is served from a different origin
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        // High level logging of requests and responses
        .layer(TraceLayer::new_for_http())
        // Compress responses
        .layer(CompressionLayer::new())
}

#[instrument]
async fn root() -> &'static str {
    "Gemini proxy backend is running!"
}

#[instrument]
async fn health() -> impl IntoResponse {
    tracing::info!("health check");

    axum::Json(json!({ "status" : "UP" }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::warn!("signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use tokio::runtime::Runtime;

    use super::*;

    #[test]
    fn test_root() {
        let rt = Runtime::new().unwrap();
        let response = rt.block_on(root()).into_response();
        assert_eq!(response.status(), 200);
    }

    #[test]
    fn test_health() {
        let rt = Runtime::new().unwrap();
        let response = rt.block_on(health()).into_response();
        assert_eq!(response.status(), 200);
    }
}
