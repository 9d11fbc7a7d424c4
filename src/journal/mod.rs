//! Internal audit trail: a SQLite `log` table next to the configuration.
//!
//! Every init, submission and failed save leaves one line here. Writing to
//! the journal never blocks the operation being logged.

pub mod log;

use crate::errors::AppResult;
use crate::utils::path::expand_tilde;
use rusqlite::Connection;
use std::fs;

pub struct Journal {
    pub conn: Connection,
}

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_log_operation ON log(operation);
        "#,
    )
}

impl Journal {
    /// Open (and create if needed) the journal at `path`.
    pub fn open(path: &str) -> AppResult<Self> {
        let path = expand_tilde(path);
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(&path)?;
        ensure_log_table(&conn)?;
        Ok(Self { conn })
    }

    /// In-memory journal, for embedding and tests.
    pub fn in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        ensure_log_table(&conn)?;
        Ok(Self { conn })
    }
}
