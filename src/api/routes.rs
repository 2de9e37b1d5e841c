//! REST endpoints for the honeypot.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use secrecy::{ExposeSecret, SecretString};
use tower_http::trace::TraceLayer;
use tracing::{error, warn};

use crate::session::{MessageEvent, SessionOrchestrator};

/// Header carrying the shared secret.
pub const API_KEY_HEADER: &str = "x-api-key";

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: SessionOrchestrator,
    pub api_key: Arc<SecretString>,
}

/// Build the Axum router with the honeypot and health routes.
pub fn honeypot_routes(orchestrator: SessionOrchestrator, api_key: SecretString) -> Router {
    let state = AppState {
        orchestrator,
        api_key: Arc::new(api_key),
    };

    Router::new()
        .route("/honeypot", post(honeypot))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_api_key,
        ))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn is_authorized(headers: &HeaderMap, expected: &SecretString) -> bool {
    headers.get(API_KEY_HEADER).is_some_and(|presented| {
        constant_time_eq(presented.as_bytes(), expected.expose_secret().as_bytes())
    })
}

/// Byte comparison whose running time depends only on the lengths.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Reject requests without the shared secret before any extractor runs, so
/// an unauthenticated caller never reaches the orchestrator.
async fn require_api_key(
    State(state): State<AppState>,
    headers: HeaderMap,
    request: Request,
    next: Next,
) -> Response {
    if !is_authorized(&headers, &state.api_key) {
        warn!(path = %request.uri().path(), "Rejected request with missing or invalid API key");
        return (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"error": "Invalid API Key"})),
        )
            .into_response();
    }
    next.run(request).await
}

// ── Health ──────────────────────────────────────────────────────────────

async fn health(State(state): State<AppState>) -> Response {
    match state.orchestrator.store().conversation_count().await {
        Ok(count) => Json(serde_json::json!({
            "status": "ok",
            "service": "scam-honeypot",
            "conversations": count,
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "Health check could not reach store");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(serde_json::json!({"status": "degraded", "error": e.to_string()})),
            )
                .into_response()
        }
    }
}

// ── Honeypot ────────────────────────────────────────────────────────────

/// POST /honeypot
///
/// Body schema errors (missing `message` or `sender`) are rejected by the
/// `Json` extractor.
async fn honeypot(State(state): State<AppState>, Json(event): Json<MessageEvent>) -> Response {
    match state.orchestrator.handle(event).await {
        Ok(resp) => (StatusCode::OK, Json(resp)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to process message");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({"error": e.to_string()})),
            )
                .into_response()
        }
    }
}
