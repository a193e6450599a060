//! Single-day statistics and multi-day trend series.

use crate::core::migrator::LogShape;
use crate::models::work_status::WorkStatus;
use crate::models::{AppData, DayLog, date_key};
use chrono::{Days, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value};

/// Per-status counts over a sequence of statuses. EMPTY is never counted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub slacking: u32,
    pub normal: u32,
    pub focused: u32,
}

impl StatusCounts {
    pub fn tally<I: IntoIterator<Item = WorkStatus>>(statuses: I) -> Self {
        let mut counts = Self::default();
        for status in statuses {
            match status {
                WorkStatus::Slacking => counts.slacking += 1,
                WorkStatus::Normal => counts.normal += 1,
                WorkStatus::Focused => counts.focused += 1,
                WorkStatus::Empty => {}
            }
        }
        counts
    }

    pub fn total(&self) -> u32 {
        self.slacking + self.normal + self.focused
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStats {
    pub slacking: u32,
    pub normal: u32,
    pub focused: u32,
    pub total_recorded: u32,
    /// 0-100, share of the maximum attainable score (all hours FOCUSED).
    pub focus_score: u32,
}

pub fn compute_day_stats(log: &DayLog) -> DayStats {
    let counts = StatusCounts::tally(log.statuses());
    let total_recorded = counts.total();

    let score_sum: u32 = log.statuses().filter_map(|s| s.score()).sum();

    let focus_score = if total_recorded > 0 {
        ((score_sum as f64 / (total_recorded * 2) as f64) * 100.0).round() as u32
    } else {
        0
    };

    DayStats {
        slacking: counts.slacking,
        normal: counts.normal,
        focused: counts.focused,
        total_recorded,
        focus_score,
    }
}

/// How much of the active day has been recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RecordingProgress {
    pub percent: u32,
    pub hours_to_record: u32,
}

impl RecordingProgress {
    pub fn new(stats: &DayStats, active_hours_count: usize) -> Self {
        let active = active_hours_count as u32;
        let percent =
            ((stats.total_recorded as f64 / active.max(1) as f64) * 100.0).round() as u32;

        Self {
            percent,
            hours_to_record: active.saturating_sub(stats.total_recorded),
        }
    }
}

/// Verbal rating of a focus score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusLevel {
    FullSpeed,
    Steady,
    Low,
}

impl FocusLevel {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            FocusLevel::FullSpeed
        } else if score >= 50 {
            FocusLevel::Steady
        } else {
            FocusLevel::Low
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FocusLevel::FullSpeed => "Full speed ahead",
            FocusLevel::Steady => "Steady progress",
            FocusLevel::Low => "Low momentum",
        }
    }
}

/// One day of a trend series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: String,
    pub slacking: u32,
    pub normal: u32,
    pub focused: u32,
}

impl TrendPoint {
    fn new(date: NaiveDate, counts: StatusCounts) -> Self {
        Self {
            date: date_key(&date),
            slacking: counts.slacking,
            normal: counts.normal,
            focused: counts.focused,
        }
    }
}

/// Longest accepted trend window.
pub const MAX_TREND_DAYS: u32 = 366;

/// Dates of the window ending at `center`, oldest first.
/// A zero-day window is treated as a single day and the window is capped
/// at [`MAX_TREND_DAYS`]. Dates before the calendar minimum are left out.
pub fn window_dates(center: NaiveDate, window_days: u32) -> Vec<NaiveDate> {
    let days = window_days.clamp(1, MAX_TREND_DAYS) as u64;
    let mut dates: Vec<NaiveDate> = (0..days)
        .map_while(|back| center.checked_sub_days(Days::new(back)))
        .collect();
    dates.reverse();
    dates
}

/// Trend over `window_days` days ending at `center` (inclusive).
/// Dates without a record produce zero counts.
pub fn compute_trend(store: &AppData, center: NaiveDate, window_days: u32) -> Vec<TrendPoint> {
    window_dates(center, window_days)
        .into_iter()
        .map(|d| {
            let counts = store
                .get(&date_key(&d))
                .map(|rec| StatusCounts::tally(rec.log.statuses()))
                .unwrap_or_default();
            TrendPoint::new(d, counts)
        })
        .collect()
}

/// Same series computed straight from a raw, unmigrated payload.
/// Records may keep their log under `log` or be the log themselves.
pub fn compute_trend_raw(
    raw: &Map<String, Value>,
    center: NaiveDate,
    window_days: u32,
) -> Vec<TrendPoint> {
    window_dates(center, window_days)
        .into_iter()
        .map(|d| {
            let counts = raw
                .get(&date_key(&d))
                .map(|rec| StatusCounts::tally(LogShape::resolve(rec).entries().map(|(_, s)| s)))
                .unwrap_or_default();
            TrendPoint::new(d, counts)
        })
        .collect()
}
