use axum::Router;

use crate::AppState;

pub mod health;
pub mod status;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .nest("/api", status::routes())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::config::Settings;
    use crate::AppState;

    fn app() -> axum::Router {
        let state = AppState {
            settings: Arc::new(Settings::for_tests()),
        };
        super::routes().with_state(state)
    }

    async fn get_json(path: &str) -> (StatusCode, serde_json::Value) {
        let response = app()
            .oneshot(Request::get(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn root_reports_healthy() {
        let (status, body) = get_json("/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["message"], "Welcome to ProcureFlow V5 API");
        assert_eq!(body["version"], "1.0.0");
        assert_eq!(body["status"], "healthy");
    }

    #[tokio::test]
    async fn health_reports_service_name() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "ProcureFlow V5 Backend");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn api_status_lists_features() {
        let (status, body) = get_json("/api/status").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["api_version"], "v1");
        assert_eq!(body["status"], "operational");
        assert_eq!(body["features"]["multi_tenant"], true);
        assert_eq!(body["features"]["authentication"], true);
        assert_eq!(body["features"]["project_management"], true);
        assert_eq!(body["features"]["document_management"], true);
    }

    #[tokio::test]
    async fn unknown_route_is_404() {
        let response = app()
            .oneshot(Request::get("/api/v1/projects").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
