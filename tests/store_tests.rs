use chrono::NaiveDate;
use dayflow::core::tracker::{TrackerLogic, todo_slot};
use dayflow::db::migrate::{migrate_stored_records, run_pending_migrations};
use dayflow::db::pool::DbPool;
use dayflow::db::store::{DayStore, STORE_KEY, read_payload, write_payload};
use dayflow::models::{RangeKind, TimeRange, TodoPatch, WorkStatus};

mod common;
use common::setup_test_db;

fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

fn memory_store() -> DayStore {
    DayStore::from_pool(DbPool::in_memory().unwrap()).unwrap()
}

#[test]
fn test_get_or_default_does_not_persist() {
    let store = memory_store();
    let day = d("2025-10-14");

    let rec = store.get_or_default(&day);
    assert!(rec.log.is_empty());
    assert_eq!(rec.todos.iter().count(), 5);

    assert!(!store.contains(&day));
    assert!(read_payload(store.conn()).unwrap().is_none());
}

#[test]
fn test_save_persists_across_reopen() {
    let db_path = setup_test_db("store_reopen");
    let day = d("2025-10-14");

    {
        let mut store = DayStore::open(&db_path).unwrap();
        TrackerLogic::set_status(&mut store, &day, 9, WorkStatus::Focused).unwrap();
    }

    let store = DayStore::open(&db_path).unwrap();
    assert!(store.contains(&day));
    assert_eq!(store.get_or_default(&day).log.status_at(9), WorkStatus::Focused);
}

#[test]
fn test_set_empty_clears_hour() {
    let mut store = memory_store();
    let day = d("2025-10-14");

    TrackerLogic::set_status(&mut store, &day, 9, WorkStatus::Normal).unwrap();
    TrackerLogic::set_status(&mut store, &day, 9, WorkStatus::Empty).unwrap();

    let rec = store.get_or_default(&day);
    assert!(rec.log.is_empty());
    assert!(!rec.log.has_records());
}

#[test]
fn test_toggle_same_status_clears() {
    let mut store = memory_store();
    let day = d("2025-10-14");

    let first = TrackerLogic::toggle_status(&mut store, &day, 10, WorkStatus::Focused).unwrap();
    assert_eq!(first, WorkStatus::Focused);

    let second = TrackerLogic::toggle_status(&mut store, &day, 10, WorkStatus::Focused).unwrap();
    assert_eq!(second, WorkStatus::Empty);
    assert_eq!(store.get_or_default(&day).log.status_at(10), WorkStatus::Empty);
}

#[test]
fn test_invalid_hour_is_rejected() {
    let mut store = memory_store();
    let day = d("2025-10-14");
    assert!(TrackerLogic::set_status(&mut store, &day, 24, WorkStatus::Normal).is_err());
    assert!(!store.contains(&day));
}

#[test]
fn test_todo_updates() {
    let mut store = memory_store();
    let day = d("2025-10-14");
    let slot = todo_slot(2).unwrap();

    let item = TrackerLogic::update_todo(
        &mut store,
        &day,
        slot,
        TodoPatch {
            text: Some("Review PR".to_string()),
            completed: None,
        },
    )
    .unwrap();
    assert_eq!(item.text, "Review PR");
    assert!(!item.completed);

    let toggled = TrackerLogic::toggle_todo(&mut store, &day, slot).unwrap();
    assert!(toggled.completed);
    assert_eq!(toggled.text, "Review PR");

    let rec = store.get_or_default(&day);
    assert_eq!(rec.todos.completed_count(), 1);
    assert_eq!(rec.todos.get(1).unwrap().text, "Review PR");

    assert!(todo_slot(0).is_err());
    assert!(todo_slot(6).is_err());
    assert!(TrackerLogic::toggle_todo(&mut store, &day, 5).is_err());
}

#[test]
fn test_range_updates_only_touch_one_day() {
    let mut store = memory_store();
    let day = d("2025-10-14");
    let other = d("2025-10-15");

    let r = TrackerLogic::update_range(&mut store, &day, RangeKind::Out, Some(17), None).unwrap();
    assert_eq!(r, TimeRange::new(17, 19, true));

    let r = TrackerLogic::set_range_enabled(&mut store, &day, RangeKind::Sleep2, None).unwrap();
    assert!(r.enabled);

    let r = TrackerLogic::set_range_enabled(&mut store, &day, RangeKind::Sleep2, Some(false)).unwrap();
    assert!(!r.enabled);

    assert_eq!(store.get_or_default(&day).config.out.start, 17);
    assert_eq!(store.get_or_default(&other).config.out.start, 18);
    assert!(!store.contains(&other));

    assert!(TrackerLogic::update_range(&mut store, &day, RangeKind::Out, None, Some(24)).is_err());
}

#[test]
fn test_corrupt_payload_is_set_aside() {
    let db_path = setup_test_db("store_corrupt");

    {
        let pool = DbPool::new(&db_path).unwrap();
        run_pending_migrations(&pool.conn).unwrap();
        write_payload(&pool.conn, "{ definitely not json").unwrap();
    }

    let store = DayStore::open(&db_path).unwrap();
    assert!(store.data().is_empty());
    assert_eq!(read_payload(store.conn()).unwrap().as_deref(), Some("{}"));

    let aside: String = store
        .conn()
        .query_row(
            "SELECT value FROM kv_store WHERE key LIKE ?1",
            [format!("{STORE_KEY}.corrupt.%")],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(aside, "{ definitely not json");

    let logged: i64 = store
        .conn()
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'store_load_failed'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(logged, 1);
}

#[test]
fn test_stored_records_migration_rewrites_legacy_payload() {
    let pool = DbPool::in_memory().unwrap();
    run_pending_migrations(&pool.conn).unwrap();
    write_payload(
        &pool.conn,
        r#"{"2025-10-14":{"log":{"9":"NORMAL"},"config":{"sleep":{"start":0,"end":6,"enabled":true}}}}"#,
    )
    .unwrap();

    let report = migrate_stored_records(&pool.conn).unwrap();
    assert_eq!(report.records, 1);
    assert_eq!(report.configs_upgraded, 1);

    let payload = read_payload(&pool.conn).unwrap().unwrap();
    assert!(payload.contains("sleep1"));
    assert!(!payload.contains("\"sleep\""));

    let again = migrate_stored_records(&pool.conn).unwrap();
    assert!(!again.changed_anything());
}

#[test]
fn test_schema_migrations_are_idempotent() {
    let pool = DbPool::in_memory().unwrap();
    run_pending_migrations(&pool.conn).unwrap();
    run_pending_migrations(&pool.conn).unwrap();

    let applied: i64 = pool
        .conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = 'migration_applied'",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(applied, 1);
}
