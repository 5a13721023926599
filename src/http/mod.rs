//! REST layer over the population store, generator and polls

pub mod error;
pub mod extract;
mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::core::error::Result;

pub use error::{ApiResult, HttpApiError};
pub use state::{AppState, World};

pub fn router(state: AppState) -> Router {
    routes::api_routes()
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

/// Serve until ctrl-c, then write a snapshot if one is configured
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let app = router(state.clone());
    let listener = TcpListener::bind(addr).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if let Some(path) = &state.config.server.snapshot_path {
        let world = state.inner.lock().await;
        world.store.save_snapshot(path)?;
        info!("Saved snapshot to {}", path.display());
    }
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
