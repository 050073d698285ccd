//! HTTP facade: maps requests onto the store, backup, and export logic.

pub mod app_state;
pub mod backups;
pub mod error;
pub mod events;
pub mod export;
pub mod routes;

pub use app_state::{AppState, SharedState};
pub use error::{ApiError, ApiResult, StatusBody};
pub use routes::create_router;

use crate::errors::AppResult;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(state: AppState, addr: &str) -> AppResult<()> {
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    let app = create_router(Arc::new(state));
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}
