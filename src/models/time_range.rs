use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

pub const HOURS_PER_DAY: u8 = 24;

/// Validate an hour coming from user input.
pub fn validate_hour(hour: i64) -> AppResult<u8> {
    if (0..HOURS_PER_DAY as i64).contains(&hour) {
        Ok(hour as u8)
    } else {
        Err(AppError::InvalidHour(hour.to_string()))
    }
}

pub fn parse_hour(s: &str) -> AppResult<u8> {
    let trimmed = s.trim();
    // accept both "9" and "09:00"
    let digits = trimmed.strip_suffix(":00").unwrap_or(trimmed);
    let value: i64 = digits
        .parse()
        .map_err(|_| AppError::InvalidHour(s.to_string()))?;
    validate_hour(value)
}

/// Half-open interval `[start, end)` on a 24-hour clock.
/// `start > end` crosses midnight, `start == end` is zero-width.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    pub start: u8,
    pub end: u8,
    pub enabled: bool,
}

impl TimeRange {
    pub const fn new(start: u8, end: u8, enabled: bool) -> Self {
        Self {
            start,
            end,
            enabled,
        }
    }

    pub fn wraps_midnight(&self) -> bool {
        self.start > self.end
    }

    /// Number of hours covered when enabled.
    pub fn len_hours(&self) -> u8 {
        if self.wraps_midnight() {
            HOURS_PER_DAY - self.start + self.end
        } else {
            self.end - self.start
        }
    }

    /// "23:00 → 08:00"
    pub fn describe(&self) -> String {
        format!("{:02}:00 → {:02}:00", self.start, self.end)
    }
}
