//! Health check endpoints for liveness and readiness probes

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;

use super::state::AppState;

/// Health response with optional vector store status
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vector_store: Option<VectorStoreCheck>,
}

/// Health check status
#[derive(Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
}

/// Vector store health detail
#[derive(Serialize)]
pub struct VectorStoreCheck {
    pub store_type: &'static str,
    pub reachable: bool,
}

/// Simple health check - returns 200 if the service is running
pub async fn health_check() -> impl IntoResponse {
    let response = HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        vector_store: None,
    };

    (StatusCode::OK, Json(response))
}

/// Readiness check verifying the vector store is reachable
pub async fn ready_check(State(state): State<AppState>) -> impl IntoResponse {
    let reachable = state
        .vector_store
        .health_check()
        .await
        .unwrap_or(false);

    let status = if reachable {
        HealthStatus::Healthy
    } else {
        HealthStatus::Degraded
    };

    let response = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION").to_string(),
        vector_store: Some(VectorStoreCheck {
            store_type: state.vector_store.store_type(),
            reachable,
        }),
    };

    let status_code = if reachable {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status_code, Json(response))
}
