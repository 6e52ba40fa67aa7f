mod api;
mod error;

use crate::console::Console;
use anyhow::{Context, Result};
use axum::{extract::DefaultBodyLimit, routing::post, Router};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Builds the ingest router.
///
/// No request-tracing layer is installed, so the only per-request output is
/// what the handlers print to the console.
pub fn router(console: Arc<Console>) -> Router {
    Router::new()
        .route(
            "/debug",
            post(api::ingest_single).fallback(api::unsupported_method),
        )
        .route(
            "/debug/batch",
            post(api::ingest_batch).fallback(api::unsupported_method),
        )
        .fallback(api::not_found)
        .layer(DefaultBodyLimit::disable())
        .layer(CorsLayer::permissive())
        .with_state(console)
}

/// Binds the listening socket on all interfaces.
pub async fn bind(port: u16) -> Result<TcpListener> {
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind debug server to port {}", port))
}

/// Serves requests until Ctrl+C is received.
pub async fn serve(listener: TcpListener, console: Arc<Console>) -> Result<()> {
    if let Ok(addr) = listener.local_addr() {
        info!("Debug server listening on http://{}", addr);
    }

    axum::serve(listener, router(console))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("debug server stopped unexpectedly")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        // Without a signal handler the server keeps running until killed.
        warn!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
}
