//! Liveness endpoints

use axum::{routing::get, Json, Router};
use serde::Serialize;
use utoipa::ToSchema;

use crate::AppState;

const SERVICE_NAME: &str = "PromptHub API";

#[derive(Debug, Serialize, ToSchema)]
pub struct ServiceStatus {
    pub status: String,
    pub service: String,
    pub version: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct HealthCheck {
    pub status: String,
}

/// Service status
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is running", body = ServiceStatus)
    ),
    tag = "Health"
)]
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        status: "ok".to_string(),
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Health check for load balancers
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Healthy", body = HealthCheck)
    ),
    tag = "Health"
)]
pub async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "ok".to_string(),
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}
