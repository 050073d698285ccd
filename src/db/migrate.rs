use rusqlite::{Connection, OptionalExtension, Result};
use tracing::info;

/// Check if the `events` table exists.
fn events_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='events'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the `events` table and its date index.
fn create_events_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS events (
            id    INTEGER PRIMARY KEY AUTOINCREMENT,
            date  TEXT NOT NULL,
            type  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
        "#,
    )?;
    Ok(())
}

/// Bring the schema up to date. Safe to run on every start.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    if !events_table_exists(conn)? {
        info!("creating events table");
    }

    create_events_table(conn)?;
    Ok(())
}
