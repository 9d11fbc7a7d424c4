use crate::errors::AppResult;
use crate::export::{
    ExportFormat, ensure_writable, export_csv, export_json, export_xlsx, records_to_rows,
};
use crate::store::SheetStore;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the whole sheet.
    ///
    /// - `format`: csv | json | xlsx
    /// - `file`: output path; an existing file needs `force` or a confirmation
    ///
    /// Returns the number of exported rows.
    pub fn export(
        store: &dyn SheetStore,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let table = store.read()?;
        let rows = records_to_rows(&table.rows);

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
        }

        Ok(rows.len())
    }
}
