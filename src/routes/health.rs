//! Health check endpoint for container orchestration.
//!
//! Liveness and readiness probe target. Returns the same payload with 200 OK
//! for as long as the process can answer HTTP; it never consults anything
//! outside the process.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::config::HEALTH_STATUS;
use crate::state::AppState;

/// Body of `GET /healthz`.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Health check handler.
pub async fn healthz(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTH_STATUS,
        service: state.identity.service,
        version: state.identity.version,
    })
}
