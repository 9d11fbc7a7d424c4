use jobcard::core::draft::Draft;
use jobcard::core::format::MaterialStyle;
use jobcard::core::submit::{SubmitLogic, SubmitOptions};
use jobcard::errors::{AppError, AppResult};
use jobcard::models::catalog::Catalog;
use jobcard::models::job_type::JobType;
use jobcard::store::{MemoryStore, SheetStore, Table};
use std::cell::Cell;

mod common;
use common::{form, hm, record, sealant_draft};

/// Store whose reads succeed but whose writes always fail.
struct ReadOnlyStore {
    inner: MemoryStore,
}

impl SheetStore for ReadOnlyStore {
    fn read(&self) -> AppResult<Table> {
        self.inner.read()
    }

    fn write(&self, _table: &Table) -> AppResult<()> {
        Err(AppError::StoreWrite("sheet is read-only".into()))
    }

    fn describe(&self) -> String {
        "read-only".into()
    }
}

/// Store that fails on read.
struct OfflineStore;

impl SheetStore for OfflineStore {
    fn read(&self) -> AppResult<Table> {
        Err(AppError::StoreRead("network unreachable".into()))
    }

    fn write(&self, _table: &Table) -> AppResult<()> {
        panic!("write must not be reached after a failed read");
    }

    fn describe(&self) -> String {
        "offline".into()
    }
}

/// Another session appends a row right after our first read.
struct RacingStore {
    inner: MemoryStore,
    reads: Cell<usize>,
}

impl SheetStore for RacingStore {
    fn read(&self) -> AppResult<Table> {
        let snapshot = self.inner.read()?;
        if self.reads.get() == 0 {
            let mut other = snapshot.clone();
            other.push(record("Site C", "Written by someone else"));
            self.inner.write(&other)?;
        }
        self.reads.set(self.reads.get() + 1);
        Ok(snapshot)
    }

    fn write(&self, table: &Table) -> AppResult<()> {
        self.inner.write(table)
    }

    fn describe(&self) -> String {
        "racing".into()
    }
}

#[test]
fn test_reference_card_formatting() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut draft = sealant_draft(&catalog);

    let outcome = SubmitLogic::submit(
        &store,
        &catalog,
        &form("Fixed leak", "Site A"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .expect("submission succeeds");

    assert_eq!(outcome.record.materials_summary, "Sealant (2 Units)");
    assert_eq!(outcome.record.technicians_summary, "Denver");
    assert_eq!(outcome.record.work_description, "Fixed leak");
    assert_eq!(outcome.record.site, "Site A");
    assert_eq!(outcome.materials_saved, 1);
    assert_eq!(outcome.total_rows, 1);
}

#[test]
fn test_multiple_materials_joined_in_order() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut draft = sealant_draft(&catalog);
    draft.add_material(&catalog, "PVC Pipe", 2.5, None).unwrap();
    draft.add_technician(&catalog, "Jane Doe").unwrap();

    let outcome = SubmitLogic::submit(
        &store,
        &catalog,
        &form("Replaced drain", "Site B"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .unwrap();

    assert_eq!(
        outcome.record.materials_summary,
        "Sealant (2 Units), PVC Pipe (2.5 Meters)"
    );
    assert_eq!(outcome.record.technicians_summary, "Denver, Jane Doe");
    assert_eq!(outcome.materials_saved, 2);
}

#[test]
fn test_count_style_formatting() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut draft = sealant_draft(&catalog);

    let opts = SubmitOptions {
        material_style: MaterialStyle::Count,
        ..SubmitOptions::default()
    };

    let outcome =
        SubmitLogic::submit(&store, &catalog, &form("Fixed leak", "Site A"), &mut draft, &opts)
            .unwrap();

    assert_eq!(outcome.record.materials_summary, "Sealant x2");
}

#[test]
fn test_empty_materials_use_sentinel() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut draft = Draft::new();
    draft.add_technician(&catalog, "Denver").unwrap();

    let outcome = SubmitLogic::submit(
        &store,
        &catalog,
        &form("Inspection only", "Site C"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .unwrap();
    assert_eq!(outcome.record.materials_summary, "None Used");
    assert_eq!(outcome.materials_saved, 0);

    // sentinel is configurable
    let mut draft = Draft::new();
    draft.add_technician(&catalog, "Denver").unwrap();
    let opts = SubmitOptions {
        none_label: "None".into(),
        ..SubmitOptions::default()
    };
    let outcome =
        SubmitLogic::submit(&store, &catalog, &form("Inspection", "Site C"), &mut draft, &opts)
            .unwrap();
    assert_eq!(outcome.record.materials_summary, "None");
}

#[test]
fn test_blank_description_rejected_without_store_access() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();

    for desc in ["", "   ", "\n\t"] {
        let mut draft = sealant_draft(&catalog);
        let before = draft.clone();

        let err = SubmitLogic::submit(
            &store,
            &catalog,
            &form(desc, "Site A"),
            &mut draft,
            &SubmitOptions::default(),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
        assert_eq!(draft, before);
    }

    assert_eq!(store.reads(), 0);
    assert_eq!(store.writes(), 0);
}

#[test]
fn test_technician_required_by_default() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut draft = Draft::new();
    draft.add_material(&catalog, "Sealant", 1.0, None).unwrap();

    let err = SubmitLogic::submit(
        &store,
        &catalog,
        &form("Fixed leak", "Site A"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(draft.materials().len(), 1);
    assert_eq!(store.reads(), 0);

    // materials-only cards are allowed when technicians are not tracked
    let opts = SubmitOptions {
        require_technician: false,
        ..SubmitOptions::default()
    };
    let outcome =
        SubmitLogic::submit(&store, &catalog, &form("Fixed leak", "Site A"), &mut draft, &opts)
            .unwrap();
    assert_eq!(outcome.record.technicians_summary, "");
}

#[test]
fn test_material_required_when_configured() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut draft = Draft::new();
    draft.add_technician(&catalog, "Denver").unwrap();

    let opts = SubmitOptions {
        require_material: true,
        ..SubmitOptions::default()
    };

    let err =
        SubmitLogic::submit(&store, &catalog, &form("Fixed leak", "Site A"), &mut draft, &opts)
            .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
    assert_eq!(draft.technicians().len(), 1);
}

#[test]
fn test_unknown_site_and_inverted_times_rejected() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut draft = sealant_draft(&catalog);

    let err = SubmitLogic::submit(
        &store,
        &catalog,
        &form("Fixed leak", "Mars Base"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(err, AppError::UnknownSite(_)));

    let mut f = form("Fixed leak", "Site A");
    f.start_time = Some(hm(14, 0));
    f.end_time = Some(hm(9, 30));
    let err = SubmitLogic::submit(&store, &catalog, &f, &mut draft, &SubmitOptions::default())
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));

    assert_eq!(store.reads(), 0);
    assert_eq!(draft.materials().len(), 1);
}

#[test]
fn test_success_resets_draft() {
    let catalog = Catalog::default();
    let store = MemoryStore::default();
    let mut draft = sealant_draft(&catalog);

    SubmitLogic::submit(
        &store,
        &catalog,
        &form("Fixed leak", "Site A"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .unwrap();

    assert!(draft.materials().is_empty());
    assert!(draft.technicians().is_empty());
}

#[test]
fn test_append_preserves_existing_rows() {
    let catalog = Catalog::default();
    let existing = vec![
        record("Site A", "First"),
        record("Site B", "Second"),
        record("Other", "Third"),
    ];
    let store = MemoryStore::new(Table::new(existing.clone()));
    let mut draft = sealant_draft(&catalog);

    let mut f = form("Fixed leak", "site a");
    f.job_type = JobType::PreJob;
    f.start_time = Some(hm(9, 0));
    f.end_time = Some(hm(11, 15));

    let outcome =
        SubmitLogic::submit(&store, &catalog, &f, &mut draft, &SubmitOptions::default()).unwrap();

    let table = store.snapshot();
    assert_eq!(table.len(), 4);
    assert_eq!(&table.rows[..3], &existing[..]);
    assert_eq!(table.rows[3], outcome.record);
    assert_eq!(table.rows[3].site, "Site A");
    assert_eq!(table.rows[3].job_type, JobType::PreJob);
    assert_eq!(table.rows[3].start_time, Some(hm(9, 0)));
    assert_eq!(outcome.total_rows, 4);
    assert_eq!(store.reads(), 1);
    assert_eq!(store.writes(), 1);
}

#[test]
fn test_write_failure_keeps_draft() {
    let catalog = Catalog::default();
    let store = ReadOnlyStore {
        inner: MemoryStore::new(Table::new(vec![record("Site A", "First")])),
    };
    let mut draft = sealant_draft(&catalog);
    let before = draft.clone();

    let err = SubmitLogic::submit(
        &store,
        &catalog,
        &form("Fixed leak", "Site A"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::StoreWrite(ref m) if m == "sheet is read-only"));
    assert_eq!(draft, before);
    assert_eq!(store.inner.snapshot().len(), 1);
}

#[test]
fn test_read_failure_keeps_draft() {
    let catalog = Catalog::default();
    let mut draft = sealant_draft(&catalog);
    let before = draft.clone();

    let err = SubmitLogic::submit(
        &OfflineStore,
        &catalog,
        &form("Fixed leak", "Site A"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .unwrap_err();

    assert!(matches!(err, AppError::StoreRead(_)));
    assert_eq!(draft, before);
}

#[test]
fn test_lost_update_without_conflict_check() {
    let catalog = Catalog::default();
    let store = RacingStore {
        inner: MemoryStore::new(Table::new(vec![record("Site A", "First")])),
        reads: Cell::new(0),
    };
    let mut draft = sealant_draft(&catalog);

    // the concurrent row is overwritten by our whole-table write
    SubmitLogic::submit(
        &store,
        &catalog,
        &form("Fixed leak", "Site A"),
        &mut draft,
        &SubmitOptions::default(),
    )
    .unwrap();

    let table = store.inner.snapshot();
    assert_eq!(table.len(), 2);
    assert!(table.rows.iter().all(|r| r.work_description != "Written by someone else"));
}

#[test]
fn test_conflict_check_refuses_stale_write() {
    let catalog = Catalog::default();
    let store = RacingStore {
        inner: MemoryStore::new(Table::new(vec![record("Site A", "First")])),
        reads: Cell::new(0),
    };
    let mut draft = sealant_draft(&catalog);
    let before = draft.clone();

    let opts = SubmitOptions {
        conflict_check: true,
        ..SubmitOptions::default()
    };

    let err =
        SubmitLogic::submit(&store, &catalog, &form("Fixed leak", "Site A"), &mut draft, &opts)
            .unwrap_err();

    assert!(matches!(
        err,
        AppError::Conflict {
            expected: 1,
            found: 2
        }
    ));
    assert_eq!(draft, before);
    // the other session's row survived
    assert_eq!(store.inner.snapshot().len(), 2);
}

#[test]
fn test_conflict_check_passes_when_sheet_is_stable() {
    let catalog = Catalog::default();
    let store = MemoryStore::new(Table::new(vec![record("Site A", "First")]));
    let mut draft = sealant_draft(&catalog);

    let opts = SubmitOptions {
        conflict_check: true,
        ..SubmitOptions::default()
    };

    let outcome =
        SubmitLogic::submit(&store, &catalog, &form("Fixed leak", "Site A"), &mut draft, &opts)
            .unwrap();

    assert_eq!(outcome.total_rows, 2);
    assert_eq!(store.reads(), 2);
}
