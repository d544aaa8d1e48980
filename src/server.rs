//! Axum router and server setup.
//! Used by: main.

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

const PHOTOS_PATH: &str = "/v1/photos";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(handlers::status::status))
        .route("/metrics", get(handlers::metrics::metrics))
        .route(&format!("{PHOTOS_PATH}/"), get(handlers::photos::yesterday))
        .route(
            &format!("{PHOTOS_PATH}/:earth_date"),
            get(handlers::photos::by_earth_date),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run(state: AppState, addr: &str) -> std::io::Result<()> {
    let router = build_router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("shutdown signal received"),
        Err(e) => tracing::error!(error = %e, "failed to listen for shutdown signal"),
    }
}
