//! Snapshot listing and restore.

use axum::Json;
use axum::extract::{Path, State};

use super::app_state::SharedState;
use super::error::{ApiResult, StatusBody, blocking};
use crate::core::backup::BackupInfo;

/// GET /api/backups - newest first.
pub async fn list_backups(State(state): State<SharedState>) -> ApiResult<Json<Vec<BackupInfo>>> {
    let st = state.clone();
    let backups = blocking(move || st.backups.list_backups()).await?;
    Ok(Json(backups))
}

/// POST /api/backup/restore/{filename}
///
/// The write lock is held until the blocking task finishes.
pub async fn restore_backup(
    State(state): State<SharedState>,
    Path(filename): Path<String>,
) -> ApiResult<Json<StatusBody>> {
    let guard = state.write_lock.clone().lock_owned().await;
    let st = state.clone();
    blocking(move || {
        let _guard = guard;
        st.backups.restore(&filename)
    })
    .await?;

    Ok(Json(StatusBody::success_with("Backup restored successfully")))
}
