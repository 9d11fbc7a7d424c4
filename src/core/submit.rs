use crate::config::Config;
use crate::core::draft::Draft;
use crate::core::form::JobForm;
use crate::core::format::{self, MaterialStyle};
use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::models::job_record::JobRecord;
use crate::store::SheetStore;

/// Rules and formatting applied when a draft is saved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOptions {
    pub require_technician: bool,
    pub require_material: bool,
    /// Re-check the row count right before writing and refuse to overwrite
    /// rows appended by someone else in the meantime.
    pub conflict_check: bool,
    pub material_style: MaterialStyle,
    pub none_label: String,
}

impl Default for SubmitOptions {
    fn default() -> Self {
        Self {
            require_technician: true,
            require_material: false,
            conflict_check: false,
            material_style: MaterialStyle::default(),
            none_label: format::DEFAULT_NONE_LABEL.to_string(),
        }
    }
}

impl SubmitOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            require_technician: cfg.require_technician,
            require_material: cfg.require_material,
            conflict_check: cfg.conflict_check,
            material_style: cfg.material_style,
            none_label: cfg.none_label.clone(),
        }
    }
}

/// What a successful submission produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub record: JobRecord,
    pub materials_saved: usize,
    pub total_rows: usize,
}

/// High-level business logic for saving a job card.
pub struct SubmitLogic;

impl SubmitLogic {
    /// Reject the card before any store access.
    pub fn validate(
        form: &JobForm,
        draft: &Draft,
        catalog: &Catalog,
        opts: &SubmitOptions,
    ) -> AppResult<()> {
        if form.work_description.trim().is_empty() {
            return Err(AppError::Validation(
                "Please enter a work description.".into(),
            ));
        }

        if catalog.site(&form.site).is_none() {
            return Err(AppError::UnknownSite(form.site.clone()));
        }

        if let (Some(start), Some(end)) = (form.start_time, form.end_time)
            && end < start
        {
            return Err(AppError::Validation(format!(
                "End time {} is before start time {}.",
                end.format("%H:%M"),
                start.format("%H:%M")
            )));
        }

        if opts.require_technician && draft.technicians().is_empty() {
            return Err(AppError::Validation(
                "Please add at least one technician.".into(),
            ));
        }

        if opts.require_material && draft.materials().is_empty() {
            return Err(AppError::Validation(
                "Please add at least one material.".into(),
            ));
        }

        Ok(())
    }

    /// Format the card into the row that will be appended.
    pub fn build_record(
        form: &JobForm,
        draft: &Draft,
        catalog: &Catalog,
        opts: &SubmitOptions,
    ) -> JobRecord {
        let site = catalog
            .site(&form.site)
            .unwrap_or(form.site.as_str())
            .to_string();

        JobRecord {
            job_type: form.job_type,
            date: form.date,
            start_time: form.start_time,
            end_time: form.end_time,
            site,
            work_description: form.work_description.trim().to_string(),
            materials_summary: format::materials_summary(
                draft.materials(),
                opts.material_style,
                &opts.none_label,
            ),
            technicians_summary: format::technicians_summary(draft.technicians()),
        }
    }

    /// Validate, append one row to the sheet and clear the draft.
    ///
    /// 1. read the whole sheet fresh
    /// 2. append the new record after the existing rows
    /// 3. write the whole sheet back
    ///
    /// On any error the draft is left as it was.
    pub fn submit(
        store: &dyn SheetStore,
        catalog: &Catalog,
        form: &JobForm,
        draft: &mut Draft,
        opts: &SubmitOptions,
    ) -> AppResult<SubmitOutcome> {
        Self::validate(form, draft, catalog, opts)?;

        let record = Self::build_record(form, draft, catalog, opts);

        let mut table = store.read()?;
        let snapshot_len = table.len();
        table.push(record.clone());

        if opts.conflict_check {
            let found = store.read()?.len();
            if found != snapshot_len {
                return Err(AppError::Conflict {
                    expected: snapshot_len,
                    found,
                });
            }
        }

        store.write(&table)?;

        let materials_saved = draft.materials().len();
        draft.reset();

        Ok(SubmitOutcome {
            record,
            materials_saved,
            total_rows: table.len(),
        })
    }
}
