use super::{SheetStore, Table};
use crate::errors::{AppError, AppResult};
use crate::models::job_record::{JobRecord, SheetRow};
use rusqlite::{Connection, params};
use std::path::{Path, PathBuf};

/// Sheet kept in a SQLite file, table `job_cards`.
///
/// `id` only preserves insertion order; it is not part of the record.
pub struct SqliteSheet {
    path: PathBuf,
}

fn ensure_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS job_cards (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            type         TEXT NOT NULL DEFAULT 'Job',
            date         TEXT NOT NULL,
            start_time   TEXT NOT NULL DEFAULT '',
            end_time     TEXT NOT NULL DEFAULT '',
            site         TEXT NOT NULL,
            work_done    TEXT NOT NULL,
            materials    TEXT NOT NULL,
            technicians  TEXT NOT NULL
        );
        "#,
    )
}

impl SqliteSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // Fresh connection per call: nothing is cached between read and write.
    fn open(&self) -> rusqlite::Result<Connection> {
        let conn = Connection::open(&self.path)?;
        ensure_table(&conn)?;
        Ok(conn)
    }

    fn load_rows(&self) -> rusqlite::Result<Vec<SheetRow>> {
        let conn = self.open()?;
        let mut stmt = conn.prepare(
            "SELECT type, date, start_time, end_time, site, work_done, materials, technicians
             FROM job_cards ORDER BY id ASC",
        )?;

        let rows = stmt.query_map([], |row| {
            Ok(SheetRow {
                job_type: row.get(0)?,
                date: row.get(1)?,
                start_time: row.get(2)?,
                end_time: row.get(3)?,
                site: row.get(4)?,
                work_done: row.get(5)?,
                materials: row.get(6)?,
                technicians: row.get(7)?,
            })
        })?;

        rows.collect()
    }

    fn replace_rows(&self, table: &Table) -> rusqlite::Result<()> {
        let mut conn = self.open()?;
        let tx = conn.transaction()?;

        tx.execute("DELETE FROM job_cards", [])?;
        {
            let mut stmt = tx.prepare_cached(
                "INSERT INTO job_cards
                    (type, date, start_time, end_time, site, work_done, materials, technicians)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            )?;

            for record in &table.rows {
                let r = record.to_row();
                stmt.execute(params![
                    r.job_type,
                    r.date,
                    r.start_time,
                    r.end_time,
                    r.site,
                    r.work_done,
                    r.materials,
                    r.technicians
                ])?;
            }
        }

        tx.commit()
    }
}

impl SheetStore for SqliteSheet {
    fn read(&self) -> AppResult<Table> {
        let rows = self
            .load_rows()
            .map_err(|e| AppError::StoreRead(format!("{}: {e}", self.path.display())))?;

        let mut records = Vec::with_capacity(rows.len());
        for (i, row) in rows.into_iter().enumerate() {
            let record = JobRecord::try_from(row).map_err(|e| {
                AppError::StoreRead(format!("{} row {}: {e}", self.path.display(), i + 1))
            })?;
            records.push(record);
        }

        Ok(Table::new(records))
    }

    fn write(&self, table: &Table) -> AppResult<()> {
        self.replace_rows(table)
            .map_err(|e| AppError::StoreWrite(format!("{}: {e}", self.path.display())))
    }

    fn describe(&self) -> String {
        format!("sqlite:{}", self.path.display())
    }
}
