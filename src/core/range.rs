//! Inactive-range evaluation and derivation of the active hours of a day.

use crate::models::day_config::DayConfig;
use crate::models::time_range::{HOURS_PER_DAY, TimeRange};

/// Whether `hour` falls inside `range`.
///
/// - disabled ranges never match
/// - `start <= end`: `start <= hour < end` (zero-width when equal)
/// - `start > end`: the range wraps over midnight
pub fn in_range(hour: u8, range: &TimeRange) -> bool {
    if !range.enabled {
        return false;
    }

    if range.start > range.end {
        hour >= range.start || hour < range.end
    } else {
        hour >= range.start && hour < range.end
    }
}

/// Whether `hour` is covered by any of the day's inactive ranges.
pub fn is_inactive(hour: u8, config: &DayConfig) -> bool {
    config.ranges().iter().any(|r| in_range(hour, r))
}

/// Hours not covered by sleep1, sleep2 or out, in ascending order.
pub fn active_hours(config: &DayConfig) -> Vec<u8> {
    (0..HOURS_PER_DAY)
        .filter(|h| !is_inactive(*h, config))
        .collect()
}
