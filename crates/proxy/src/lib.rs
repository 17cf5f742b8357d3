//! The intermediary endpoint between the front end and the remote
//! generation service.
//!
//! `POST /api/generate` validates the topic, forwards it to
//! `<upstream>/generate-blog` and relays the answer. Upstream failures keep
//! their status code; everything else that goes wrong becomes a generic
//! `500`.

#![deny(missing_docs)]

#[macro_use]
extern crate tracing;

mod config;

use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use reqwest::Client;
use serde_json::{Value, json};
use tokio::net::TcpListener;

pub use config::{
    DEFAULT_LISTEN_ADDR, DEFAULT_UPSTREAM_URL, ProxyConfig, ProxyConfigBuilder,
};

/// Message returned for an empty topic.
pub const EMPTY_TOPIC_MESSAGE: &str = "Please provide a topic.";
/// Message returned for unexpected failures.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong.";
/// Message relayed when the upstream failed without saying why.
pub const BACKEND_ERROR_MESSAGE: &str = "Backend error";

struct AppState {
    client: Client,
    config: ProxyConfig,
}

/// Builds the endpoint's routes.
pub fn router(config: ProxyConfig) -> Router {
    let state = Arc::new(AppState {
        client: Client::new(),
        config,
    });
    Router::new()
        .route("/health", get(health))
        .route("/api/generate", post(generate))
        .with_state(state)
}

/// Serves the endpoint on `listener` until the server fails.
pub async fn serve(
    listener: TcpListener,
    config: ProxyConfig,
) -> std::io::Result<()> {
    axum::serve(listener, router(config)).await
}

async fn health() -> &'static str {
    "OK"
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

async fn generate(State(state): State<Arc<AppState>>, body: Bytes) -> Response {
    let body: Value = match serde_json::from_slice(&body) {
        Ok(body) => body,
        Err(err) => {
            error!("unreadable request body: {err}");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_ERROR_MESSAGE,
            );
        }
    };
    let topic = match body.get("topic").and_then(Value::as_str) {
        Some(topic) if !topic.trim().is_empty() => topic,
        _ => {
            return error_response(StatusCode::BAD_REQUEST, EMPTY_TOPIC_MESSAGE);
        }
    };

    let url = state.config.generate_url();
    debug!("forwarding {topic:?} to {url}");
    let resp = match state
        .client
        .post(&url)
        .json(&json!({ "topic": topic }))
        .send()
        .await
    {
        Ok(resp) => resp,
        Err(err) => {
            error!("failed to reach the generation service: {err}");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_ERROR_MESSAGE,
            );
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        warn!("generation service answered {status}: {text}");
        let status = StatusCode::from_u16(status.as_u16())
            .unwrap_or(StatusCode::BAD_GATEWAY);
        let message = if text.is_empty() {
            BACKEND_ERROR_MESSAGE
        } else {
            text.as_str()
        };
        return error_response(status, message);
    }

    match resp.json::<Value>().await {
        Ok(data) => (StatusCode::OK, Json(data)).into_response(),
        Err(err) => {
            error!("unreadable answer from the generation service: {err}");
            error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                GENERIC_ERROR_MESSAGE,
            )
        }
    }
}
