use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub database: &'static str,
    pub timestamp: String,
}

/// GET /api/health - Service health including a document-store ping
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.store.health_check().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "healthy",
                database: "connected",
                timestamp: chrono::Utc::now().to_rfc3339(),
            }),
        ),
        Err(err) => {
            tracing::error!(error = %err, "database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unhealthy",
                    database: "unreachable",
                    timestamp: chrono::Utc::now().to_rfc3339(),
                }),
            )
        }
    }
}

/// GET /api/health/live - Process liveness, no dependencies touched
pub async fn liveness_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "alive" }))
}
