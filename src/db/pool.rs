//! Request-scoped SQLite connection.
//!
//! A `DbPool` owns exactly one connection and closes it when dropped, so a
//! request or CLI command that opens one releases it on every exit path.

use crate::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

pub struct DbPool {
    pub conn: Connection,
}

impl DbPool {
    /// Open the store at `path`. The file is created if missing; the schema is not.
    pub fn new(path: &Path) -> AppResult<Self> {
        let conn = Connection::open(path)?;
        // Keep the rollback journal: after a commit the main file alone is a full snapshot.
        conn.query_row("PRAGMA journal_mode = DELETE", [], |row| {
            row.get::<_, String>(0)
        })?;
        conn.busy_timeout(std::time::Duration::from_secs(5))?;
        Ok(Self { conn })
    }
}
