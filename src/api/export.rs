//! Monthly spreadsheet download.

use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use super::app_state::SharedState;
use super::error::{ApiResult, blocking};
use crate::db::pool::DbPool;
use crate::errors::AppError;
use crate::export::{ExportLogic, XLSX_CONTENT_TYPE};
use crate::utils::date::today;

/// GET /api/export/{year}/{month}
pub async fn export_month(
    State(state): State<SharedState>,
    Path((year, month)): Path<(String, String)>,
) -> ApiResult<Response> {
    let year: i32 = year
        .parse()
        .map_err(|_| AppError::Validation(format!("invalid year: {year}")))?;
    let month: u32 = month
        .parse()
        .map_err(|_| AppError::InvalidMonth(month.clone()))?;

    let st = state.clone();
    let file = blocking(move || {
        let mut pool = DbPool::new(&st.db_path())?;
        ExportLogic::export_month(&mut pool, &st.config.export_prefix, year, month, today())
    })
    .await?;

    let disposition = format!("attachment; filename=\"{}\"", file.filename);
    Ok((
        [
            (header::CONTENT_TYPE, XLSX_CONTENT_TYPE.to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        file.bytes,
    )
        .into_response())
}
