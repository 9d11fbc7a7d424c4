use super::job_type::JobType;
use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// Column headers of the sheet, in storage order.
pub const SHEET_HEADERS: [&str; 8] = [
    "Type",
    "Date",
    "Start Time",
    "End Time",
    "Site",
    "Work Done",
    "Materials",
    "Technicians",
];

/// Single-technician column name used by sheets started before technician
/// lists existed.
pub const LEGACY_TECHNICIAN_HEADER: &str = "Technician";

/// Position in [`SHEET_HEADERS`] of a stored column, `None` for columns the
/// job card does not model.
pub fn column_index(name: &str) -> Option<usize> {
    if name == LEGACY_TECHNICIAN_HEADER {
        return Some(SHEET_HEADERS.len() - 1);
    }
    SHEET_HEADERS.iter().position(|h| *h == name)
}

/// One finalized job card, as persisted in the sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub job_type: JobType,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub site: String,
    pub work_description: String,
    pub materials_summary: String,
    pub technicians_summary: String,
}

/// Flat, all-string view of a record (CSV / JSON / XLSX).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetRow {
    #[serde(rename = "Type", default)]
    pub job_type: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Start Time", default)]
    pub start_time: String,
    #[serde(rename = "End Time", default)]
    pub end_time: String,
    #[serde(rename = "Site")]
    pub site: String,
    #[serde(rename = "Work Done")]
    pub work_done: String,
    #[serde(rename = "Materials")]
    pub materials: String,
    #[serde(rename = "Technicians", alias = "Technician")]
    pub technicians: String,
}

impl JobRecord {
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        time::format_optional(self.start_time)
    }

    pub fn end_str(&self) -> String {
        time::format_optional(self.end_time)
    }

    pub fn to_row(&self) -> SheetRow {
        SheetRow {
            job_type: self.job_type.as_str().to_string(),
            date: self.date_str(),
            start_time: self.start_str(),
            end_time: self.end_str(),
            site: self.site.clone(),
            work_done: self.work_description.clone(),
            materials: self.materials_summary.clone(),
            technicians: self.technicians_summary.clone(),
        }
    }

    /// Column values in [`SHEET_HEADERS`] order.
    pub fn to_cells(&self) -> Vec<String> {
        self.to_row().into_cells()
    }
}

impl SheetRow {
    pub fn into_cells(self) -> Vec<String> {
        vec![
            self.job_type,
            self.date,
            self.start_time,
            self.end_time,
            self.site,
            self.work_done,
            self.materials,
            self.technicians,
        ]
    }
}

impl TryFrom<SheetRow> for JobRecord {
    type Error = AppError;

    fn try_from(row: SheetRow) -> AppResult<Self> {
        // Sheets started before job types existed have no (or an empty) Type cell.
        let job_type = if row.job_type.trim().is_empty() {
            JobType::Job
        } else {
            JobType::from_sheet_str(row.job_type.trim())
                .ok_or_else(|| AppError::InvalidJobType(row.job_type.clone()))?
        };

        let date =
            date::parse_date(row.date.trim()).ok_or_else(|| AppError::InvalidDate(row.date.clone()))?;

        Ok(JobRecord {
            job_type,
            date,
            start_time: time::parse_optional_cell(&row.start_time)?,
            end_time: time::parse_optional_cell(&row.end_time)?,
            site: row.site,
            work_description: row.work_done,
            materials_summary: row.materials,
            technicians_summary: row.technicians,
        })
    }
}
