use crate::errors::AppResult;
use crate::models::job_record::{JobRecord, SHEET_HEADERS};
use crate::store::SheetStore;
use crate::utils::table::{Column, Table};

pub struct HistoryLogic;

impl HistoryLogic {
    /// Most recent `n` rows, oldest first. Always a fresh read.
    pub fn recent(store: &dyn SheetStore, n: usize) -> AppResult<Vec<JobRecord>> {
        let table = store.read()?;
        Ok(table.tail(n).to_vec())
    }

    /// Render rows as a fixed-width text table.
    pub fn render(records: &[JobRecord]) -> String {
        let widths = [7, 10, 5, 5, 16, 40, 40, 30];
        let columns = SHEET_HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| Column::new(h, w))
            .collect();

        let mut table = Table::new(columns);
        for r in records {
            table.add_row(r.to_cells());
        }
        table.render()
    }
}
