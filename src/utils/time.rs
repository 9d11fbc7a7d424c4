//! Time utilities: parsing HH:MM, formatting optional times for sheet cells.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(t.trim(), "%H:%M:%S"))
        .ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// Empty cell → None, anything else must be a valid time.
pub fn parse_optional_cell(cell: &str) -> AppResult<Option<NaiveTime>> {
    if cell.trim().is_empty() {
        return Ok(None);
    }
    parse_time(cell)
        .map(Some)
        .ok_or_else(|| AppError::InvalidTime(cell.to_string()))
}

pub fn format_optional(t: Option<NaiveTime>) -> String {
    t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default()
}
