use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
}

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
    pub version: String,
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: String,
    pub database: &'static str,
}

async fn root(State(state): State<AppState>) -> Json<RootResponse> {
    Json(RootResponse {
        message: format!("Welcome to {} API", state.settings.app_name),
        version: state.settings.app_version.clone(),
        status: "healthy",
    })
}

/// Health check endpoint for monitoring.
///
/// The `database` field is a placeholder until a connection pool exists; no
/// connectivity check runs here.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: format!("{} Backend", state.settings.app_name),
        database: "connected",
    })
}
