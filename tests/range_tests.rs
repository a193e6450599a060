use dayflow::core::range::{active_hours, in_range, is_inactive};
use dayflow::models::{DayConfig, RangeKind, TimeRange};

#[test]
fn test_plain_range_is_half_open() {
    let r = TimeRange::new(13, 14, true);
    assert!(!in_range(12, &r));
    assert!(in_range(13, &r));
    assert!(!in_range(14, &r));
}

#[test]
fn test_range_wrapping_midnight() {
    let r = TimeRange::new(23, 8, true);
    assert!(in_range(23, &r));
    assert!(in_range(0, &r));
    assert!(in_range(7, &r));
    assert!(!in_range(8, &r));
    assert!(!in_range(22, &r));
    assert_eq!(r.len_hours(), 9);
}

#[test]
fn test_disabled_range_never_matches() {
    let r = TimeRange::new(0, 23, false);
    assert!((0..24).all(|h| !in_range(h, &r)));
}

#[test]
fn test_zero_width_range_covers_nothing() {
    let r = TimeRange::new(10, 10, true);
    assert!((0..24).all(|h| !in_range(h, &r)));
    assert_eq!(r.len_hours(), 0);
}

#[test]
fn test_default_active_hours() {
    let cfg = DayConfig::default();
    let expected: Vec<u8> = (8..=17).chain(19..=22).collect();
    assert_eq!(active_hours(&cfg), expected);
}

#[test]
fn test_ranges_are_a_union() {
    let mut cfg = DayConfig::default();
    cfg.get_mut(RangeKind::Sleep2).enabled = true;

    assert!(is_inactive(13, &cfg));
    assert!(is_inactive(18, &cfg));
    assert!(is_inactive(2, &cfg));
    assert!(!is_inactive(12, &cfg));
    assert_eq!(active_hours(&cfg).len(), 13);
}

#[test]
fn test_all_ranges_disabled_gives_full_day() {
    let mut cfg = DayConfig::default();
    for kind in RangeKind::ALL {
        cfg.get_mut(kind).enabled = false;
    }
    assert_eq!(active_hours(&cfg), (0..24).collect::<Vec<u8>>());
}

#[test]
fn test_active_hours_are_sorted_and_unique() {
    let cfg = DayConfig {
        sleep1: TimeRange::new(22, 6, true),
        sleep2: TimeRange::new(5, 9, true),
        out: TimeRange::new(12, 12, true),
    };
    let hours = active_hours(&cfg);
    assert!(hours.windows(2).all(|w| w[0] < w[1]));
    assert_eq!(hours.first(), Some(&9));
    assert_eq!(hours.last(), Some(&21));
    assert_eq!(hours.len(), 13);
}
