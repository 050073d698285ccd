// src/export/logic.rs

use crate::db::pool::DbPool;
use crate::db::queries::events_between;
use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::write_file;
use crate::export::model::DailyRecord;
use crate::export::range::month_bounds;
use crate::export::xlsx::build_workbook;
use crate::utils::date::month_name;
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tracing::info;

/// A rendered workbook ready to be sent or saved.
#[derive(Debug, Clone)]
pub struct ExportFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// High level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Render every event of `year`-`month` into an `.xlsx` workbook.
    ///
    /// `today` only feeds the file name:
    /// `<prefix>_<MonthName>_<Year>_exported_<YYYYMMDD>.xlsx`.
    pub fn export_month(
        pool: &mut DbPool,
        prefix: &str,
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> AppResult<ExportFile> {
        let filename = export_filename(prefix, year, month, today)?;
        let records = Self::load_records(pool, year, month)?;

        let bytes = build_workbook(&records)
            .map_err(|e| AppError::Export(format!("failed to build workbook: {e}")))?;

        info!(%filename, rows = records.len(), "month exported");
        Ok(ExportFile { filename, bytes })
    }

    /// Rows of the "Daily Records" sheet, ascending by date.
    pub fn load_records(pool: &mut DbPool, year: i32, month: u32) -> AppResult<Vec<DailyRecord>> {
        let (first, last) = month_bounds(year, month)?;
        let events = events_between(&pool.conn, first, last)?;
        Ok(events.iter().map(DailyRecord::from).collect())
    }

    /// Export into `dir` and return the written path.
    pub fn export_month_to_dir(
        pool: &mut DbPool,
        prefix: &str,
        year: i32,
        month: u32,
        today: NaiveDate,
        dir: &Path,
        force: bool,
    ) -> AppResult<PathBuf> {
        let file = Self::export_month(pool, prefix, year, month, today)?;
        let path = dir.join(&file.filename);
        write_file(&path, &file.bytes, force)?;
        Ok(path)
    }
}

pub fn export_filename(prefix: &str, year: i32, month: u32, today: NaiveDate) -> AppResult<String> {
    let name = month_name(month).ok_or_else(|| AppError::InvalidMonth(month.to_string()))?;
    Ok(format!(
        "{prefix}_{name}_{year}_exported_{}.xlsx",
        today.format("%Y%m%d")
    ))
}
