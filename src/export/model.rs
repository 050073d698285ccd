// src/export/model.rs

use crate::models::Event;
use crate::utils::date::weekday_name;

/// One row of the "Daily Records" sheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyRecord {
    pub date: String,
    pub day: String,
    pub kind: String,
}

impl From<&Event> for DailyRecord {
    fn from(ev: &Event) -> Self {
        Self {
            date: ev.date.format("%Y-%m-%d").to_string(),
            day: weekday_name(ev.date),
            kind: ev.kind.display_name().to_string(),
        }
    }
}

pub(crate) const DAILY_HEADERS: [&str; 3] = ["Date", "Day", "Type"];
pub(crate) const SUMMARY_HEADERS: [&str; 2] = ["Type", "Count"];

pub(crate) fn record_to_row(r: &DailyRecord) -> [&str; 3] {
    [r.date.as_str(), r.day.as_str(), r.kind.as_str()]
}

/// Count per display name, in order of first appearance.
pub fn summarize(records: &[DailyRecord]) -> Vec<(String, u32)> {
    let mut out: Vec<(String, u32)> = Vec::new();
    for r in records {
        match out.iter_mut().find(|(name, _)| *name == r.kind) {
            Some((_, count)) => *count += 1,
            None => out.push((r.kind.clone(), 1)),
        }
    }
    out
}
