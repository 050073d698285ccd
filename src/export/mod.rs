// src/export/mod.rs

mod fs_utils;
pub mod logic;
mod model;
mod range;
mod xlsx;

pub use logic::{ExportFile, ExportLogic, export_filename};
pub use model::{DailyRecord, summarize};
pub use xlsx::{DAILY_SHEET, SUMMARY_SHEET};

/// MIME type of the generated workbook.
pub const XLSX_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
