//! Interactive editing session: one job form plus one draft, driven by
//! line commands (`material "PVC Pipe" 2.5`, `tech Denver`, `submit`, ...).
//!
//! The session only mutates state and reports what happened; printing is
//! left to the command layer.

use crate::core::draft::Draft;
use crate::core::form::JobForm;
use crate::core::history::HistoryLogic;
use crate::core::submit::{SubmitLogic, SubmitOptions, SubmitOutcome};
use crate::errors::{AppError, AppResult};
use crate::models::catalog::Catalog;
use crate::models::job_record::JobRecord;
use crate::models::job_type::JobType;
use crate::models::line_item::LineItem;
use crate::models::technician::TechnicianRef;
use crate::store::SheetStore;
use crate::utils::{date, time};
use clap::{Parser, Subcommand};

/// One line typed at the session prompt.
#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_version_flag = true)]
pub struct SessionLine {
    #[command(subcommand)]
    pub action: SessionAction,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// Add a material line (unit defaults from the material category)
    #[command(alias = "m")]
    Material {
        name: String,
        #[arg(allow_negative_numbers = true)]
        quantity: f64,
        unit: Option<String>,
    },

    /// Remove material number N (as shown by `show`)
    #[command(name = "remove-material", alias = "rm-material")]
    RemoveMaterial { number: usize },

    /// Add a technician from the roster
    #[command(alias = "t")]
    Tech { name: String },

    /// Remove technician number N (as shown by `show`)
    #[command(name = "remove-tech", alias = "rm-tech")]
    RemoveTech { number: usize },

    /// List technicians that can still be added
    Techs,

    /// Set the site
    Site { name: String },

    /// Set the date (YYYY-MM-DD)
    Date { date: String },

    /// Set the start time (HH:MM)
    Start { time: String },

    /// Set the end time (HH:MM)
    End { time: String },

    /// Set the job type
    #[command(name = "type")]
    Type {
        #[arg(value_enum)]
        job_type: JobType,
    },

    /// Set the description of the work done
    Desc {
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },

    /// Show the current card
    Show,

    /// Save the card to the sheet
    Submit,

    /// Show the last rows of the sheet
    History { rows: Option<usize> },

    /// Leave the session (unsaved items are discarded)
    #[command(alias = "exit")]
    Quit,
}

/// What an action did, for the command layer to display.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    MaterialAdded(LineItem),
    MaterialRemoved(Option<LineItem>),
    TechnicianAdded { name: String, added: bool },
    TechnicianRemoved(Option<TechnicianRef>),
    Available(Vec<String>),
    FieldSet { field: &'static str, value: String },
    Card,
    Submitted(SubmitOutcome),
    History(Vec<JobRecord>),
    Quit,
}

/// Split a prompt line into words; single or double quotes group words.
pub fn split_line(line: &str) -> AppResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for ch in line.chars() {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => current.push(ch),
            None if ch == '"' || ch == '\'' => {
                quote = Some(ch);
                in_word = true;
            }
            None if ch.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(ch);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(AppError::Validation(format!("unterminated quote ({q})")));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}

/// Parse a prompt line. `Ok(None)` for a blank line.
pub fn parse_line(line: &str) -> Result<Option<SessionAction>, String> {
    let words = split_line(line).map_err(|e| e.to_string())?;
    if words.is_empty() {
        return Ok(None);
    }

    SessionLine::try_parse_from(words)
        .map(|l| Some(l.action))
        .map_err(|e| e.to_string())
}

pub struct Session<'a> {
    catalog: &'a Catalog,
    store: &'a dyn SheetStore,
    opts: SubmitOptions,
    history_rows: usize,
    form: JobForm,
    draft: Draft,
}

impl<'a> Session<'a> {
    pub fn new(
        catalog: &'a Catalog,
        store: &'a dyn SheetStore,
        opts: SubmitOptions,
        history_rows: usize,
    ) -> Self {
        Self {
            catalog,
            store,
            opts,
            history_rows,
            form: JobForm::blank(catalog),
            draft: Draft::new(),
        }
    }

    pub fn form(&self) -> &JobForm {
        &self.form
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn store(&self) -> &dyn SheetStore {
        self.store
    }

    /// Apply one action. Errors leave form and draft untouched.
    pub fn apply(&mut self, action: SessionAction) -> AppResult<Reply> {
        match action {
            SessionAction::Material {
                name,
                quantity,
                unit,
            } => {
                let item = self
                    .draft
                    .add_material(self.catalog, &name, quantity, unit.as_deref())?;
                Ok(Reply::MaterialAdded(item.clone()))
            }

            SessionAction::RemoveMaterial { number } => Ok(Reply::MaterialRemoved(
                number
                    .checked_sub(1)
                    .and_then(|i| self.draft.remove_material(i)),
            )),

            SessionAction::Tech { name } => {
                let added = self.draft.add_technician(self.catalog, &name)?;
                let name = self
                    .catalog
                    .technician(&name)
                    .unwrap_or(name.as_str())
                    .to_string();
                Ok(Reply::TechnicianAdded { name, added })
            }

            SessionAction::RemoveTech { number } => Ok(Reply::TechnicianRemoved(
                number
                    .checked_sub(1)
                    .and_then(|i| self.draft.remove_technician(i)),
            )),

            SessionAction::Techs => Ok(Reply::Available(
                self.draft
                    .available_technicians(self.catalog)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
            )),

            SessionAction::Site { name } => {
                let site = self
                    .catalog
                    .site(&name)
                    .ok_or_else(|| AppError::UnknownSite(name.clone()))?;
                self.form.site = site.to_string();
                Ok(self.field_set("site", site.to_string()))
            }

            SessionAction::Date { date: d } => {
                self.form.date = date::parse_date(&d).ok_or(AppError::InvalidDate(d))?;
                Ok(self.field_set("date", self.form.date.to_string()))
            }

            SessionAction::Start { time: t } => {
                self.form.start_time = Some(time::parse_time(&t).ok_or(AppError::InvalidTime(t))?);
                Ok(self.field_set("start", time::format_optional(self.form.start_time)))
            }

            SessionAction::End { time: t } => {
                self.form.end_time = Some(time::parse_time(&t).ok_or(AppError::InvalidTime(t))?);
                Ok(self.field_set("end", time::format_optional(self.form.end_time)))
            }

            SessionAction::Type { job_type } => {
                self.form.job_type = job_type;
                Ok(self.field_set("type", job_type.as_str().to_string()))
            }

            SessionAction::Desc { text } => {
                self.form.work_description = text.join(" ");
                Ok(self.field_set("description", self.form.work_description.clone()))
            }

            SessionAction::Show => Ok(Reply::Card),

            SessionAction::Submit => {
                let outcome = SubmitLogic::submit(
                    self.store,
                    self.catalog,
                    &self.form,
                    &mut self.draft,
                    &self.opts,
                )?;
                // il form si svuota insieme al draft
                self.form = JobForm::blank(self.catalog);
                Ok(Reply::Submitted(outcome))
            }

            SessionAction::History { rows } => Ok(Reply::History(HistoryLogic::recent(
                self.store,
                rows.unwrap_or(self.history_rows),
            )?)),

            SessionAction::Quit => Ok(Reply::Quit),
        }
    }

    fn field_set(&self, field: &'static str, value: String) -> Reply {
        Reply::FieldSet { field, value }
    }
}
