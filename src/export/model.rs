// src/export/model.rs

use crate::models::job_record::{JobRecord, SHEET_HEADERS, SheetRow};

/// Header per CSV / XLSX (JSON uses the serde names, which are the same)
pub(crate) fn get_headers() -> Vec<&'static str> {
    SHEET_HEADERS.to_vec()
}

/// Flatten records for export, sheet order preserved.
pub fn records_to_rows(records: &[JobRecord]) -> Vec<SheetRow> {
    records.iter().map(JobRecord::to_row).collect()
}

/// Cells of one row, in header order.
pub(crate) fn row_to_cells(row: &SheetRow) -> Vec<String> {
    row.clone().into_cells()
}
