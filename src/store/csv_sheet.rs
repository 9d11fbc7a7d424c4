use super::{SheetStore, Table};
use crate::errors::{AppError, AppResult};
use crate::models::job_record::{JobRecord, SheetRow, column_index};
use std::fmt::Display;
use std::fs;
use std::path::{Path, PathBuf};

/// Sheet kept as a CSV file with a header row.
///
/// Columns are matched by header name. Columns the job card does not model
/// are read into the [`Table`] and written back in place.
pub struct CsvSheet {
    path: PathBuf,
}

impl CsvSheet {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the new content is written to before replacing the sheet.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_to(&self, path: &Path, table: &Table) -> Result<(), csv::Error> {
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;

        // header esplicito: serde non lo scrive se la tabella è vuota
        let header = table.write_header();
        wtr.write_record(&header)?;

        for i in 0..table.len() {
            wtr.write_record(table.row_cells(i, &header))?;
        }

        wtr.flush()?;
        Ok(())
    }
}

fn read_err(path: &Path, e: impl Display) -> AppError {
    AppError::StoreRead(format!("{}: {e}", path.display()))
}

fn line_err(path: &Path, line: usize, e: impl Display) -> AppError {
    AppError::StoreRead(format!("{} line {line}: {e}", path.display()))
}

fn write_err(path: &Path, e: impl Display) -> AppError {
    AppError::StoreWrite(format!("{}: {e}", path.display()))
}

impl SheetStore for CsvSheet {
    fn read(&self) -> AppResult<Table> {
        // A sheet that was never written is simply empty.
        if !self.path.exists() {
            return Ok(Table::default());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|e| read_err(&self.path, e))?;

        let headers = rdr.headers().map_err(|e| read_err(&self.path, e))?.clone();
        let foreign: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| column_index(h).is_none())
            .map(|(i, _)| i)
            .collect();

        let mut table = Table {
            header: headers.iter().map(str::to_string).collect(),
            ..Table::default()
        };

        for (i, result) in rdr.records().enumerate() {
            // +2: 1-based, plus the header line
            let line = i + 2;

            let record = result.map_err(|e| line_err(&self.path, line, e))?;
            let row: SheetRow = record
                .deserialize(Some(&headers))
                .map_err(|e| line_err(&self.path, line, e))?;
            let job = JobRecord::try_from(row).map_err(|e| line_err(&self.path, line, e))?;

            table.rows.push(job);
            table.foreign_cells.push(
                foreign
                    .iter()
                    .map(|&c| record.get(c).unwrap_or_default().to_string())
                    .collect(),
            );
        }

        Ok(table)
    }

    fn write(&self, table: &Table) -> AppResult<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| write_err(&self.path, e))?;
        }

        let staging = self.staging_path();
        if let Err(e) = self.write_to(&staging, table) {
            let _ = fs::remove_file(&staging);
            return Err(write_err(&self.path, e));
        }

        fs::rename(&staging, &self.path).map_err(|e| {
            let _ = fs::remove_file(&staging);
            write_err(&self.path, e)
        })
    }

    fn describe(&self) -> String {
        format!("csv:{}", self.path.display())
    }
}
