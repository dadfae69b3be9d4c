//! Health check endpoint.

use axum::{Json, extract::State};
use serde::Serialize;

use super::AppState;

/// Health status response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    /// Always "healthy" while the process is serving.
    pub status: &'static str,
    /// Service version.
    pub version: &'static str,
    /// Number of live category subscriptions.
    pub subscriptions: usize,
}

/// Liveness check: the process is up and its subscriptions exist.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        subscriptions: state.subscriptions.len(),
    })
}
