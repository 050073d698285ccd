use super::event_type::EventType;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One attendance record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,         // ⇔ events.id (assigned by SQLite, never changes)
    pub date: NaiveDate, // ⇔ events.date (TEXT "YYYY-MM-DD")
    pub kind: EventType, // ⇔ events.type (tag, unknown tags kept verbatim)
}

/// Body of `POST /api/events` and `PUT /api/events/{id}`.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct EventInput {
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub kind: EventType,
}

/// Shape the calendar front end consumes.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CalendarEvent {
    pub id: i64,
    pub title: String,
    pub start: String,
    #[serde(rename = "classNames")]
    pub class_names: Vec<String>,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<&Event> for CalendarEvent {
    fn from(ev: &Event) -> Self {
        let tag = ev.kind.to_db_str().to_string();
        Self {
            id: ev.id,
            title: ev.kind.display_name().to_string(),
            start: ev.date.format("%Y-%m-%d").to_string(),
            class_names: vec![tag.clone()],
            kind: tag,
        }
    }
}
