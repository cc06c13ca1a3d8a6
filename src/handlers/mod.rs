//! HTTP handlers for the gateway.
//!
//! Status endpoints live here; the forwarding endpoints are in the
//! `news` and `synthesize` submodules.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::startup::AppState;

pub mod news;
pub mod synthesize;

pub async fn root_status() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "running" })))
}

/// Health check endpoint for Docker/K8s liveness probes.
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": state.config.service_name,
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
