use std::sync::Arc;

use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod config;
mod error;

use config::Settings;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let settings = Settings::from_env();

    info!(
        "🚀 Starting {} Backend v{}",
        settings.app_name, settings.app_version
    );

    let state = AppState {
        settings: Arc::new(settings),
    };
    let app = build_app(state.clone());

    // The shutdown line runs on every exit path, bind failures included.
    let result = serve(app, &state.settings).await;
    info!("🛑 Shutting down {} Backend", state.settings.app_name);
    result
}

fn build_app(state: AppState) -> Router {
    api::routes()
        .with_state(state.clone())
        .layer(RequestBodyLimitLayer::new(state.settings.max_file_size))
        .layer(cors_layer())
        .layer(CatchPanicLayer::new())
        .layer(TraceLayer::new_for_http())
}

/// Permissive cross-origin policy: any origin, method, or header, with
/// credentials. tower-http rejects the `*` wildcard when credentials are
/// allowed, so the request's own values are mirrored back instead.
/// Insecure default; restrict to the frontend origin in production.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn serve(app: Router, settings: &Settings) -> anyhow::Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("📡 Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Resolve on SIGINT or SIGTERM so in-flight requests drain before exit.
async fn shutdown_signal() {
    let ctrl_c = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(_) => std::future::pending().await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
