//! Sentimento Web Server
//!
//! Axum-based HTTP proxy in front of the sentiment service, plus the
//! embedded web client.

pub mod error;
pub mod routes;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use sentimento_core::AnalysisService;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/sentiment-analysis", post(routes::sentiment::analyze))
        .route("/health", get(routes::health::health))
        .with_state(state);

    Router::new()
        .route("/", get(routes::client::index))
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Run the web server.
pub async fn run_server(service: AnalysisService, host: &str, port: u16) -> anyhow::Result<()> {
    if !service.is_configured() {
        tracing::warn!("Starting without sentiment service credentials; analysis requests will fail");
    }

    let app = create_router(AppState::new(service));

    let listener = tokio::net::TcpListener::bind(format!("{}:{}", host, port)).await?;
    tracing::info!("Web server listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
