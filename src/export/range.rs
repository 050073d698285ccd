// src/export/range.rs

use crate::errors::{AppError, AppResult};
use chrono::{Months, NaiveDate};

/// First and last calendar day of `year`-`month`, both inclusive.
pub(crate) fn month_bounds(year: i32, month: u32) -> AppResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;

    let last = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or_else(|| AppError::InvalidDate(format!("end of {year}-{month:02}")))?;

    Ok((first, last))
}
