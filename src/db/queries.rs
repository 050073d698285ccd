use crate::errors::{AppError, AppResult};
use crate::models::{Event, EventType};
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

const DATE_FMT: &str = "%Y-%m-%d";

/// All events, ordered by date then id.
pub fn list_events(conn: &Connection) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, type FROM events
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Events whose date lies in `[first, last]`, ascending by date.
pub fn events_between(conn: &Connection, first: NaiveDate, last: NaiveDate) -> AppResult<Vec<Event>> {
    let mut stmt = conn.prepare(
        "SELECT id, date, type FROM events
         WHERE date BETWEEN ?1 AND ?2
         ORDER BY date ASC, id ASC",
    )?;

    let rows = stmt.query_map(
        params![
            first.format(DATE_FMT).to_string(),
            last.format(DATE_FMT).to_string()
        ],
        map_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a new event and return the id SQLite assigned to it.
pub fn add_event(conn: &Connection, date: NaiveDate, kind: &EventType) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO events (date, type) VALUES (?1, ?2)",
        params![date.format(DATE_FMT).to_string(), kind.to_db_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Overwrite date and type of `id`. Returns the number of rows touched (0 if absent).
pub fn update_event(conn: &Connection, id: i64, date: NaiveDate, kind: &EventType) -> AppResult<usize> {
    let n = conn.execute(
        "UPDATE events SET date = ?1, type = ?2 WHERE id = ?3",
        params![date.format(DATE_FMT).to_string(), kind.to_db_str(), id],
    )?;
    Ok(n)
}

/// Remove `id`. Returns the number of rows deleted (0 if absent).
pub fn delete_event(conn: &Connection, id: i64) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM events WHERE id = ?1", params![id])?;
    Ok(n)
}

fn map_row(row: &Row) -> Result<Event> {
    let date_str: String = row.get("date")?;

    let date = NaiveDate::parse_from_str(&date_str, DATE_FMT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            1,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(date_str.clone())),
        )
    })?;

    let kind_str: String = row.get("type")?;

    Ok(Event {
        id: row.get("id")?,
        date,
        kind: EventType::from_db_str(&kind_str),
    })
}
