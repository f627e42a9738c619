//! Health, readiness, and service-info routes (mounted at the root).

use axum::extract::State;
use axum::http::StatusCode;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Service name, for fleet dashboards.
    pub service: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
}

/// GET /health -- liveness only; returns 200 whenever the process is up.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "mf-api",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /ready -- readiness; verifies database connectivity.
async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<serde_json::Value>) {
    match mfapi_db::health_check(&state.pool).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "status": "ready", "database": "connected" })),
        ),
        Err(err) => {
            tracing::error!(error = %err, "Readiness check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not ready",
                    "database": "disconnected",
                    "error": err.to_string(),
                })),
            )
        }
    }
}

/// GET / -- service information.
async fn root() -> Json<serde_json::Value> {
    Json(json!({
        "service": "Mutual Fund API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "running",
        "endpoints": {
            "health": "/health",
            "ready": "/ready",
            "docs": "See README.md",
        },
    }))
}

/// Mount health check routes (intended for root-level, NOT under `/api`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
}
