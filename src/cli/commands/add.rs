use crate::cli::commands::open_journal;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::draft::{Draft, parse_material_spec};
use crate::core::form::JobForm;
use crate::core::submit::{SubmitLogic, SubmitOptions, SubmitOutcome};
use crate::errors::{AppError, AppResult};
use crate::journal::Journal;
use crate::journal::log::ttlog_quiet;
use crate::store::open_store;
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Save one job card built from command-line flags.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        desc,
        site,
        date: date_arg,
        start,
        end,
        job_type,
        techs,
        materials,
        conflict_check,
    } = cmd
    {
        let catalog = &cfg.catalog;

        //
        // 1. Core fields
        //
        let job_date = date::parse_or_today(date_arg.as_ref())
            .ok_or_else(|| AppError::InvalidDate(date_arg.clone().unwrap_or_default()))?;

        let form = JobForm {
            job_type: *job_type,
            date: job_date,
            start_time: parse_optional_time(start.as_ref())?,
            end_time: parse_optional_time(end.as_ref())?,
            site: site
                .clone()
                .unwrap_or_else(|| catalog.default_site().to_string()),
            work_description: desc.clone(),
        };

        //
        // 2. Draft, in the order given on the command line
        //
        let mut draft = Draft::new();

        for t in techs {
            if !draft.add_technician(catalog, t)? {
                warning(format!("Technician '{}' listed twice, kept once.", t));
            }
        }

        for spec in materials {
            let (name, qty, unit) = parse_material_spec(spec)?;
            draft.add_material(catalog, &name, qty, unit.as_deref())?;
        }

        //
        // 3. Submit
        //
        let mut opts = SubmitOptions::from_config(cfg);
        opts.conflict_check |= *conflict_check;

        let store = open_store(&cfg.sheet);
        let journal = open_journal(cfg);

        let result = SubmitLogic::submit(store.as_ref(), catalog, &form, &mut draft, &opts);
        log_submission(journal.as_ref(), &store.describe(), &form.site, result.as_ref());

        let outcome = result?;
        report_success(&outcome);
    }

    Ok(())
}

/// Journal line for a submission attempt (success or store failure).
pub(crate) fn log_submission(
    journal: Option<&Journal>,
    sheet: &str,
    site: &str,
    result: Result<&SubmitOutcome, &AppError>,
) {
    let Some(journal) = journal else {
        return;
    };

    match result {
        Ok(o) => ttlog_quiet(
            journal,
            "submit",
            sheet,
            &format!(
                "{} {} at {}: {} materials, techs: {} (row {})",
                o.record.job_type.as_str(),
                o.record.date_str(),
                o.record.site,
                o.materials_saved,
                o.record.technicians_summary,
                o.total_rows
            ),
        ),
        // validation errors never reach the store: nothing to audit
        Err(AppError::Validation(_)) | Err(AppError::UnknownSite(_)) => {}
        Err(e) => ttlog_quiet(
            journal,
            "submit_failed",
            sheet,
            &format!("{} ({})", e, site),
        ),
    }
}

pub(crate) fn report_success(outcome: &SubmitOutcome) {
    success(format!(
        "Saved! Logged {} materials for {}.",
        outcome.materials_saved, outcome.record.site
    ));
}
