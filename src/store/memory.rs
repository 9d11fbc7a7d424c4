use super::{SheetStore, Table};
use crate::errors::AppResult;
use std::cell::{Cell, RefCell};

/// Sheet kept in memory, for embedding the pipeline and for tests.
///
/// Counts reads and writes so callers can check that a rejected submission
/// never touched the store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    table: RefCell<Table>,
    reads: Cell<usize>,
    writes: Cell<usize>,
}

impl MemoryStore {
    pub fn new(table: Table) -> Self {
        Self {
            table: RefCell::new(table),
            ..Self::default()
        }
    }

    pub fn snapshot(&self) -> Table {
        self.table.borrow().clone()
    }

    pub fn reads(&self) -> usize {
        self.reads.get()
    }

    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl SheetStore for MemoryStore {
    fn read(&self) -> AppResult<Table> {
        self.reads.set(self.reads.get() + 1);
        Ok(self.table.borrow().clone())
    }

    fn write(&self, table: &Table) -> AppResult<()> {
        self.writes.set(self.writes.get() + 1);
        *self.table.borrow_mut() = table.clone();
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
