//! Route table of the HTTP facade.

use axum::Router;
use axum::routing::{get, post, put};
use tower_http::trace::TraceLayer;

use super::app_state::SharedState;
use super::{backups, events, export};

/// Build the complete router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route(
            "/api/events",
            get(events::list_events).post(events::create_event),
        )
        .route(
            "/api/events/{id}",
            put(events::update_event).delete(events::delete_event),
        )
        .route("/api/backups", get(backups::list_backups))
        .route(
            "/api/backup/restore/{filename}",
            post(backups::restore_backup),
        )
        .route("/api/export/{year}/{month}", get(export::export_month))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> axum::Json<serde_json::Value> {
    axum::Json(serde_json::json!({ "status": "ok" }))
}
