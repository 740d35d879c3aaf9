//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (both upstreams answer)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 only when the predictor and the chatbot both respond.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    match check_upstreams(&state).await {
        (true, true) => StatusCode::OK,
        _ => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
///
/// Full health status with component details.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let (predictor_ok, chatbot_ok) = check_upstreams(&state).await;

    let overall_status = if predictor_ok && chatbot_ok {
        "healthy"
    } else if predictor_ok || chatbot_ok {
        "degraded"
    } else {
        "unhealthy"
    };

    Json(HealthResponse {
        status: overall_status.to_string(),
        predictor: component_status(predictor_ok).to_string(),
        chatbot: component_status(chatbot_ok).to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

fn component_status(ok: bool) -> &'static str {
    if ok {
        "ok"
    } else {
        "error"
    }
}

async fn check_upstreams(state: &AppState) -> (bool, bool) {
    let (predictor, chatbot) = tokio::join!(
        state.predictor.health_check(),
        state.chatbot.health_check()
    );
    (predictor.is_ok(), chatbot.is_ok())
}
