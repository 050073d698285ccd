use crate::core::backup::BackupManager;
use crate::db::pool::DbPool;
use crate::db::queries::add_event;
use crate::errors::AppResult;
use crate::models::event_type::EventType;
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::info;

/// Record a new day and snapshot the store.
pub struct AddLogic;

impl AddLogic {
    pub fn apply(
        pool: &mut DbPool,
        backups: &BackupManager,
        date: NaiveDate,
        kind: &EventType,
    ) -> AppResult<i64> {
        Self::apply_at(pool, backups, date, kind, Local::now().naive_local())
    }

    /// Same as `apply`, with the snapshot stamped at `at`.
    pub fn apply_at(
        pool: &mut DbPool,
        backups: &BackupManager,
        date: NaiveDate,
        kind: &EventType,
        at: NaiveDateTime,
    ) -> AppResult<i64> {
        let id = add_event(&pool.conn, date, kind)?;
        info!(id, %date, kind = %kind, "event added");

        backups.snapshot_at(at)?;
        Ok(id)
    }
}
