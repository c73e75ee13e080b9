pub mod handlers;
pub mod types;

use crate::{
    Result,
    config::{Config, ServerConfig},
    tutor::TutorService,
};
use axum::{
    Router,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Routes of the tutor API, with tracing and CORS layers applied.
pub fn router(app_state: handlers::AppState, server: &ServerConfig) -> Router {
    let cors = if server.cors_allow_any_origin {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
    };

    Router::new()
        .route("/health", get(handlers::health))
        .route("/ask", post(handlers::ask))
        .route("/api/ask", post(handlers::ask))
        .route("/api/syllabus", get(handlers::syllabus))
        .with_state(app_state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

pub async fn run(config: Config) -> Result<()> {
    let tutor = TutorService::from_config(&config);

    let app_state = handlers::AppState {
        tutor: Arc::new(tutor),
    };

    let app = router(app_state, &config.server);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
