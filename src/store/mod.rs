//! The shared sheet holding every submitted job card.
//!
//! A sheet is read and written as a whole: there is no row-level update,
//! no locking and no cache. Two sessions saving at the same moment can
//! overwrite each other's row (see `conflict_check` in the config).

mod csv_sheet;
mod memory;
mod sqlite_sheet;

pub use csv_sheet::CsvSheet;
pub use memory::MemoryStore;
pub use sqlite_sheet::SqliteSheet;

use crate::errors::AppResult;
use crate::models::job_record::{JobRecord, SHEET_HEADERS, column_index};
use crate::utils::path::expand_tilde;

/// Ordered rows of the sheet. No primary key: position is the history.
///
/// A CSV sheet may carry columns the job card does not model (a `Notes`
/// column added by hand, the layout of an older sheet). `header` keeps the
/// stored column order and `foreign_cells` their values, one entry per row,
/// so that a rewrite gives them back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub rows: Vec<JobRecord>,
    /// Stored header; empty means the standard layout.
    pub header: Vec<String>,
    /// Cells of the unmodelled columns of `header`, in header order.
    pub foreign_cells: Vec<Vec<String>>,
}

impl Table {
    pub fn new(rows: Vec<JobRecord>) -> Self {
        Self {
            rows,
            ..Self::default()
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Append a record; its unmodelled cells stay empty.
    pub fn push(&mut self, record: JobRecord) {
        self.rows.push(record);
    }

    /// Last `n` rows, oldest first.
    pub fn tail(&self, n: usize) -> &[JobRecord] {
        let start = self.rows.len().saturating_sub(n);
        &self.rows[start..]
    }

    /// Header to write: the stored one, followed by any standard column it
    /// lacks. The standard layout when nothing was stored.
    pub fn write_header(&self) -> Vec<String> {
        if self.header.is_empty() {
            return SHEET_HEADERS.iter().map(|h| h.to_string()).collect();
        }

        let mut header = self.header.clone();
        for (i, h) in SHEET_HEADERS.iter().enumerate() {
            if !self.header.iter().any(|c| column_index(c) == Some(i)) {
                header.push(h.to_string());
            }
        }
        header
    }

    /// Row `index` laid out under `header` (as returned by [`Table::write_header`]).
    pub fn row_cells(&self, index: usize, header: &[String]) -> Vec<String> {
        let Some(record) = self.rows.get(index) else {
            return Vec::new();
        };
        let known = record.to_cells();
        let foreign = self.foreign_cells.get(index);

        let mut next_foreign = 0;
        header
            .iter()
            .map(|name| match column_index(name) {
                Some(i) => known[i].clone(),
                None => {
                    let cell = foreign
                        .and_then(|f| f.get(next_foreign))
                        .cloned()
                        .unwrap_or_default();
                    next_foreign += 1;
                    cell
                }
            })
            .collect()
    }
}

/// Backend holding the sheet.
pub trait SheetStore {
    /// Every stored row, read fresh from the backend.
    fn read(&self) -> AppResult<Table>;

    /// Replace the whole stored content with `table`.
    fn write(&self, table: &Table) -> AppResult<()>;

    /// Human readable location, for messages and the journal.
    fn describe(&self) -> String;
}

/// Pick a backend from a sheet address.
///
/// - `sqlite://<path>`, `*.sqlite`, `*.db` → [`SqliteSheet`]
/// - anything else → [`CsvSheet`]
pub fn open_store(address: &str) -> Box<dyn SheetStore> {
    if let Some(rest) = address.strip_prefix("sqlite://") {
        return Box::new(SqliteSheet::new(expand_tilde(rest)));
    }

    let path = expand_tilde(address);
    let is_sqlite = path
        .extension()
        .map(|e| {
            let e = e.to_string_lossy().to_lowercase();
            e == "sqlite" || e == "db"
        })
        .unwrap_or(false);

    if is_sqlite {
        Box::new(SqliteSheet::new(path))
    } else {
        Box::new(CsvSheet::new(path))
    }
}
