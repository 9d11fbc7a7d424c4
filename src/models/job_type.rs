use clap::ValueEnum;
use serde::Serialize;

/// Kind of job card: work already done, or work being planned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, ValueEnum)]
pub enum JobType {
    #[default]
    Job,
    #[value(name = "pre-job", alias = "prejob")]
    PreJob,
}

impl JobType {
    /// Label written in the `Type` column of the sheet.
    pub fn as_str(&self) -> &'static str {
        match self {
            JobType::Job => "Job",
            JobType::PreJob => "Pre-Job",
        }
    }

    /// Convert sheet string → enum
    pub fn from_sheet_str(s: &str) -> Option<Self> {
        match s {
            "Job" => Some(JobType::Job),
            "Pre-Job" => Some(JobType::PreJob),
            _ => None,
        }
    }
}
