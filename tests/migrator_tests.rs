use dayflow::core::migrator::{migrate, migrate_with_report, parse_store, parse_store_with_report};
use dayflow::models::day_config::{DEFAULT_OUT, DEFAULT_SLEEP1, DEFAULT_SLEEP2};
use dayflow::models::{DayConfig, TimeRange, WorkStatus};
use serde_json::{Map, Value, json};

fn obj(v: Value) -> Map<String, Value> {
    v.as_object().cloned().expect("object")
}

#[test]
fn test_record_without_config_gets_defaults() {
    let raw = obj(json!({
        "2025-10-14": {
            "log": { "9": "NORMAL" },
            "todos": []
        }
    }));

    let (data, report) = migrate_with_report(&raw);
    let rec = &data["2025-10-14"];

    assert_eq!(rec.config, DayConfig::default());
    assert_eq!(rec.log.status_at(9), WorkStatus::Normal);
    assert_eq!(report.configs_defaulted, 1);
    assert!(report.changed_anything());
}

#[test]
fn test_legacy_sleep_is_upgraded() {
    let raw = obj(json!({
        "2025-10-14": {
            "log": {},
            "todos": [],
            "config": {
                "sleep": { "start": 0, "end": 7, "enabled": true },
                "out": { "start": 8, "end": 9, "enabled": false }
            }
        }
    }));

    let (data, report) = migrate_with_report(&raw);
    let cfg = data["2025-10-14"].config;

    assert_eq!(cfg.sleep1, TimeRange::new(0, 7, true));
    assert_eq!(cfg.sleep2, DEFAULT_SLEEP2);
    assert_eq!(cfg.out, TimeRange::new(8, 9, false));
    assert_eq!(report.configs_upgraded, 1);
}

#[test]
fn test_legacy_sleep_without_out() {
    let raw = obj(json!({
        "2025-10-14": { "log": {}, "config": { "sleep": { "start": 22, "end": 6, "enabled": true } } }
    }));
    let cfg = migrate(&raw)["2025-10-14"].config;
    assert_eq!(cfg.sleep1, TimeRange::new(22, 6, true));
    assert_eq!(cfg.out, DEFAULT_OUT);
}

#[test]
fn test_malformed_range_is_repaired() {
    let raw = obj(json!({
        "2025-10-14": {
            "log": {},
            "config": {
                "sleep1": { "start": 30, "end": 8, "enabled": true },
                "sleep2": { "start": 12, "end": 13, "enabled": true },
                "out": "nope"
            }
        }
    }));

    let (data, report) = migrate_with_report(&raw);
    let cfg = data["2025-10-14"].config;

    assert_eq!(cfg.sleep1, DEFAULT_SLEEP1);
    assert_eq!(cfg.sleep2, TimeRange::new(12, 13, true));
    assert_eq!(cfg.out, DEFAULT_OUT);
    assert_eq!(report.ranges_repaired, 2);
}

#[test]
fn test_todos_are_padded_and_truncated() {
    let raw = obj(json!({
        "2025-10-13": { "log": {}, "todos": [ { "id": 0, "text": "a", "completed": true } ] },
        "2025-10-14": { "log": {}, "todos": [
            { "id": 0, "text": "1", "completed": false },
            { "id": 1, "text": "2", "completed": false },
            { "id": 2, "text": "3", "completed": false },
            { "id": 3, "text": "4", "completed": false },
            { "id": 4, "text": "5", "completed": false },
            { "id": 5, "text": "6", "completed": false }
        ] }
    }));

    let (data, report) = migrate_with_report(&raw);

    let short = &data["2025-10-13"].todos;
    assert_eq!(short.iter().count(), 5);
    assert_eq!(short.get(0).unwrap().text, "a");
    assert!(short.get(0).unwrap().completed);
    assert!(short.get(4).unwrap().is_blank());
    assert_eq!(short.get(4).unwrap().id, 4);

    let long = &data["2025-10-14"].todos;
    assert_eq!(long.iter().count(), 5);
    assert_eq!(long.get(4).unwrap().text, "5");

    assert_eq!(report.todos_filled, 1);
}

#[test]
fn test_invalid_log_entries_are_dropped() {
    let raw = obj(json!({
        "2025-10-14": { "log": { "9": "FOCUSED", "24": "NORMAL", "x": "NORMAL", "10": "BORED" } }
    }));

    let (data, report) = migrate_with_report(&raw);
    let log = &data["2025-10-14"].log;

    assert_eq!(log.entries().count(), 1);
    assert_eq!(log.status_at(9), WorkStatus::Focused);
    assert_eq!(report.entries_dropped, 3);
}

#[test]
fn test_flat_record_keeps_statuses() {
    let raw = obj(json!({ "2025-10-14": { "9": "NORMAL", "15": "SLACKING" } }));
    let rec = &migrate(&raw)["2025-10-14"];

    assert_eq!(rec.log.status_at(9), WorkStatus::Normal);
    assert_eq!(rec.log.status_at(15), WorkStatus::Slacking);
    assert_eq!(rec.config, DayConfig::default());
}

#[test]
fn test_migration_is_idempotent() {
    let raw = obj(json!({
        "2025-10-14": {
            "log": { "9": "FOCUSED" },
            "todos": [ { "id": 0, "text": "ship", "completed": false } ],
            "config": { "sleep": { "start": 0, "end": 6, "enabled": true } }
        }
    }));

    let once = migrate(&raw);
    let text = serde_json::to_string(&once).unwrap();

    let (twice, report) = parse_store_with_report(&text).unwrap();
    assert_eq!(once, twice);
    assert!(!report.changed_anything());
    assert_eq!(serde_json::to_string(&twice).unwrap(), text);
}

#[test]
fn test_serialized_shape() {
    let raw = obj(json!({ "2025-10-14": { "log": { "9": "NORMAL" } } }));
    let value = serde_json::to_value(migrate(&raw)).unwrap();
    let rec = &value["2025-10-14"];

    assert_eq!(rec["log"]["9"], "NORMAL");
    assert_eq!(rec["todos"].as_array().unwrap().len(), 5);
    assert_eq!(rec["config"]["sleep1"]["start"], 23);
    assert_eq!(rec["config"]["sleep2"]["enabled"], false);
}

#[test]
fn test_unparseable_payload_is_an_error() {
    assert!(parse_store("{not json").is_err());
    assert!(parse_store("[1, 2]").is_err());
    assert!(parse_store("{}").unwrap().is_empty());
}

#[test]
fn test_non_canonical_hour_keys_are_dropped() {
    let raw = obj(json!({
        "2025-10-14": { "log": { "9": "NORMAL", "09": "FOCUSED", "+10": "SLACKING" } }
    }));

    let (data, report) = migrate_with_report(&raw);
    let log = &data["2025-10-14"].log;

    assert_eq!(log.entries().collect::<Vec<_>>(), vec![(9, WorkStatus::Normal)]);
    assert_eq!(report.entries_dropped, 2);
}

#[test]
fn test_todo_ids_follow_slot_index() {
    let raw = obj(json!({
        "2025-10-14": { "log": {}, "todos": [ { "id": 3, "text": "x", "completed": false } ] }
    }));

    let data = migrate(&raw);
    let todos = &data["2025-10-14"].todos;
    let ids: Vec<i64> = todos.iter().map(|t| t.id).collect();

    assert_eq!(ids, vec![0, 1, 2, 3, 4]);
    assert_eq!(todos.get(0).unwrap().text, "x");
}
