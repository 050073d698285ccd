use crate::core::backup::BackupManager;
use crate::db::pool::DbPool;
use crate::db::queries::update_event;
use crate::errors::AppResult;
use crate::models::event_type::EventType;
use chrono::{Local, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

pub struct UpdateLogic;

impl UpdateLogic {
    /// Overwrite date and type of `id`. An unknown id is not an error.
    pub fn apply(
        pool: &mut DbPool,
        backups: &BackupManager,
        id: i64,
        date: NaiveDate,
        kind: &EventType,
    ) -> AppResult<()> {
        Self::apply_at(pool, backups, id, date, kind, Local::now().naive_local())
    }

    pub fn apply_at(
        pool: &mut DbPool,
        backups: &BackupManager,
        id: i64,
        date: NaiveDate,
        kind: &EventType,
        at: NaiveDateTime,
    ) -> AppResult<()> {
        match update_event(&pool.conn, id, date, kind)? {
            0 => debug!(id, "update of unknown event ignored"),
            _ => info!(id, %date, kind = %kind, "event updated"),
        }

        backups.snapshot_at(at)?;
        Ok(())
    }
}
