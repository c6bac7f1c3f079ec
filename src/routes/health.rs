use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub services: ServiceHealth,
}

#[derive(Serialize)]
pub struct ServiceHealth {
    pub assistant_model: String,
    pub assistant_upstream: String,
}

/// Health check endpoint
///
/// The estimator and repositories are in-process, so only the assistant
/// upstream can degrade the service.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let generator = state.assistant.generator();
    let upstream = generator.health_check().await;

    if let Err(e) = &upstream {
        tracing::warn!(error = %e, "Assistant upstream health check failed");
    }

    let (status, upstream_status) = if upstream.is_ok() {
        ("healthy", "ok")
    } else {
        ("degraded", "error")
    };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        services: ServiceHealth {
            assistant_model: generator.model_id().to_string(),
            assistant_upstream: upstream_status.to_string(),
        },
    })
}
