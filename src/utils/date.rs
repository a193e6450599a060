use crate::errors::{AppError, AppResult};
use chrono::NaiveDate;

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Parse an optional `YYYY-MM-DD` argument, defaulting to today.
pub fn parse_date_or_today(s: Option<&str>) -> AppResult<NaiveDate> {
    match s {
        Some(raw) => parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string())),
        None => Ok(today()),
    }
}

/// "10/14" style label used by trend tables.
pub fn short_label(date: &NaiveDate) -> String {
    date.format("%m/%d").to_string()
}

/// "Tuesday 14 October 2025"
pub fn long_label(date: &NaiveDate) -> String {
    date.format("%A %d %B %Y").to_string()
}

/// Compact stamp used in export file names (YYYYMMDD).
pub fn file_stamp(date: &NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
