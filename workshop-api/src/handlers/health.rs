use axum::Json;
use serde::Serialize;
use service_core::error::iso_timestamp;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub message: &'static str,
}

/// Liveness probe. Ignores any request body.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: iso_timestamp(),
        message: "Backend is running successfully!",
    })
}
