use chrono::{Duration, NaiveDate};
use dayflow::core::analytics::{
    DayStats, FocusLevel, MAX_TREND_DAYS, RecordingProgress, compute_day_stats, compute_trend,
    compute_trend_raw, window_dates,
};
use dayflow::models::{AppData, DayLog, DayRecord, WorkStatus};
use serde_json::json;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn log_of(entries: &[(u8, WorkStatus)]) -> DayLog {
    entries.iter().copied().collect()
}

#[test]
fn test_empty_day_stats() {
    assert_eq!(compute_day_stats(&DayLog::new()), DayStats::default());
}

#[test]
fn test_slacking_and_focused_score_50() {
    let log = log_of(&[(9, WorkStatus::Slacking), (10, WorkStatus::Focused)]);
    assert_eq!(
        compute_day_stats(&log),
        DayStats {
            slacking: 1,
            normal: 0,
            focused: 1,
            total_recorded: 2,
            focus_score: 50,
        }
    );
}

#[test]
fn test_all_focused_scores_100() {
    let log = log_of(&[(9, WorkStatus::Focused), (10, WorkStatus::Focused)]);
    let stats = compute_day_stats(&log);
    assert_eq!(stats.focused, 2);
    assert_eq!(stats.focus_score, 100);
    assert_eq!(FocusLevel::from_score(stats.focus_score), FocusLevel::FullSpeed);
}

#[test]
fn test_mixed_day_scores_50() {
    let log = log_of(&[
        (9, WorkStatus::Focused),
        (10, WorkStatus::Slacking),
        (11, WorkStatus::Normal),
    ]);
    let stats = compute_day_stats(&log);
    assert_eq!(stats.total_recorded, 3);
    assert_eq!(stats.focus_score, 50);
    assert_eq!(FocusLevel::from_score(stats.focus_score), FocusLevel::Steady);
}

#[test]
fn test_score_is_rounded() {
    // (2 + 0 + 0) / 6 = 33.3%
    let log = log_of(&[
        (9, WorkStatus::Focused),
        (10, WorkStatus::Slacking),
        (11, WorkStatus::Slacking),
    ]);
    assert_eq!(compute_day_stats(&log).focus_score, 33);
    assert_eq!(FocusLevel::from_score(33), FocusLevel::Low);
}

#[test]
fn test_explicit_empty_is_not_counted() {
    let raw = json!({ "log": { "9": "EMPTY", "10": "NORMAL" } });
    let data = dayflow::core::migrator::migrate(
        &json!({ "2025-10-14": raw }).as_object().unwrap().clone(),
    );
    let stats = compute_day_stats(&data["2025-10-14"].log);
    assert_eq!(stats.total_recorded, 1);
    assert_eq!(stats.focus_score, 50);
}

#[test]
fn test_recording_progress() {
    let log = log_of(&[(9, WorkStatus::Normal), (10, WorkStatus::Normal)]);
    let stats = compute_day_stats(&log);

    let p = RecordingProgress::new(&stats, 14);
    assert_eq!(p.percent, 14);
    assert_eq!(p.hours_to_record, 12);

    let none = RecordingProgress::new(&stats, 0);
    assert_eq!(none.hours_to_record, 0);
}

#[test]
fn test_window_dates_oldest_first() {
    let dates = window_dates(d("2025-03-02"), 3);
    assert_eq!(dates, vec![d("2025-02-28"), d("2025-03-01"), d("2025-03-02")]);
    assert_eq!(window_dates(d("2025-03-02"), 0), vec![d("2025-03-02")]);
}

#[test]
fn test_window_stops_at_calendar_minimum() {
    let center = NaiveDate::MIN + Duration::days(2);
    let dates = window_dates(center, 7);
    assert_eq!(dates.len(), 3);
    assert_eq!(dates[0], NaiveDate::MIN);
    assert_eq!(dates[2], center);

    let trend = compute_trend(&AppData::new(), center, 7);
    assert_eq!(trend.len(), 3);
}

#[test]
fn test_window_is_capped() {
    let dates = window_dates(d("2025-10-14"), u32::MAX);
    assert_eq!(dates.len(), MAX_TREND_DAYS as usize);
    assert_eq!(dates.last(), Some(&d("2025-10-14")));
}

#[test]
fn test_trend_over_seven_days() {
    let mut data = AppData::new();
    let mut rec = DayRecord::default();
    rec.log.set(9, WorkStatus::Focused).unwrap();
    rec.log.set(10, WorkStatus::Slacking).unwrap();
    data.insert("2025-10-12".to_string(), rec);

    let trend = compute_trend(&data, d("2025-10-14"), 7);
    assert_eq!(trend.len(), 7);
    assert_eq!(trend[0].date, "2025-10-08");
    assert_eq!(trend[6].date, "2025-10-14");

    let hit = &trend[4];
    assert_eq!(hit.date, "2025-10-12");
    assert_eq!((hit.slacking, hit.normal, hit.focused), (1, 0, 1));

    assert!(
        trend
            .iter()
            .filter(|p| p.date != "2025-10-12")
            .all(|p| p.slacking + p.normal + p.focused == 0)
    );
}

#[test]
fn test_raw_trend_reads_both_shapes() {
    let raw = json!({
        "2025-10-13": { "9": "NORMAL", "10": "FOCUSED", "oops": "NORMAL" },
        "2025-10-14": { "log": { "9": "SLACKING" }, "todos": [] }
    });

    let trend = compute_trend_raw(raw.as_object().unwrap(), d("2025-10-14"), 2);
    assert_eq!(trend[0].normal, 1);
    assert_eq!(trend[0].focused, 1);
    assert_eq!(trend[1].slacking, 1);
}
