use crate::models::catalog::Catalog;
use crate::models::job_type::JobType;
use crate::utils::date;
use chrono::{NaiveDate, NaiveTime};

/// Core fields of a job card, filled next to the draft line items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobForm {
    pub job_type: JobType,
    pub date: NaiveDate,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub site: String,
    pub work_description: String,
}

impl JobForm {
    /// Blank card: today, first site of the catalog, no description.
    pub fn blank(catalog: &Catalog) -> Self {
        Self {
            job_type: JobType::default(),
            date: date::today(),
            start_time: None,
            end_time: None,
            site: catalog.default_site().to_string(),
            work_description: String::new(),
        }
    }
}
