use crate::core::backup::BackupManager;
use crate::db::pool::DbPool;
use crate::db::queries::delete_event;
use crate::errors::AppResult;
use chrono::{Local, NaiveDateTime};
use tracing::{debug, info};

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove `id`. An unknown id is not an error.
    pub fn apply(pool: &mut DbPool, backups: &BackupManager, id: i64) -> AppResult<()> {
        Self::apply_at(pool, backups, id, Local::now().naive_local())
    }

    pub fn apply_at(
        pool: &mut DbPool,
        backups: &BackupManager,
        id: i64,
        at: NaiveDateTime,
    ) -> AppResult<()> {
        match delete_event(&pool.conn, id)? {
            0 => debug!(id, "delete of unknown event ignored"),
            _ => info!(id, "event deleted"),
        }

        backups.snapshot_at(at)?;
        Ok(())
    }
}
