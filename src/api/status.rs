use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/status", get(api_status))
}

#[derive(Debug, Serialize)]
pub struct ApiStatusResponse {
    pub api_version: &'static str,
    pub status: &'static str,
    pub features: FeatureFlags,
}

#[derive(Debug, Serialize)]
pub struct FeatureFlags {
    pub multi_tenant: bool,
    pub authentication: bool,
    pub project_management: bool,
    pub document_management: bool,
}

async fn api_status() -> Json<ApiStatusResponse> {
    Json(ApiStatusResponse {
        api_version: "v1",
        status: "operational",
        features: FeatureFlags {
            multi_tenant: true,
            authentication: true,
            project_management: true,
            document_management: true,
        },
    })
}
