//! Record-level migration of the persisted store.
//!
//! The store is read as raw JSON and every date entry is upgraded to the
//! current [`DayRecord`] shape. Two legacy shapes exist:
//!
//! - records without a `config` (before per-day ranges existed)
//! - configs with a single `sleep` range instead of `sleep1` + `sleep2`
//!
//! Migration is total and idempotent: its output re-serializes to the
//! current shape, which migrates to itself.

use crate::errors::{AppError, AppResult};
use crate::models::day_config::{DEFAULT_OUT, DEFAULT_SLEEP1, DEFAULT_SLEEP2, DayConfig};
use crate::models::time_range::{HOURS_PER_DAY, TimeRange};
use crate::models::todo::{TODO_SLOTS, TodoItem, TodoList};
use crate::models::work_status::WorkStatus;
use crate::models::{AppData, DayLog, DayRecord};
use serde_json::{Map, Value};

/// Where a raw record keeps its hourly log.
#[derive(Debug, Clone, Copy)]
pub enum LogShape<'a> {
    /// `{ "log": { "9": "NORMAL" }, ... }`
    Nested(&'a Value),
    /// `{ "9": "NORMAL", ... }`: the record itself is the log.
    Flat(&'a Map<String, Value>),
    /// Not an object at all.
    Missing,
}

impl<'a> LogShape<'a> {
    pub fn resolve(record: &'a Value) -> Self {
        match record {
            Value::Object(map) => match map.get("log") {
                Some(log) => LogShape::Nested(log),
                None => LogShape::Flat(map),
            },
            _ => LogShape::Missing,
        }
    }

    fn map(&self) -> Option<&'a Map<String, Value>> {
        match self {
            LogShape::Nested(v) => v.as_object(),
            LogShape::Flat(m) => Some(m),
            LogShape::Missing => None,
        }
    }

    /// Valid `(hour, status)` pairs. Keys that are not hours and values
    /// that are not statuses are skipped.
    pub fn entries(self) -> impl Iterator<Item = (u8, WorkStatus)> + 'a {
        self.map()
            .into_iter()
            .flat_map(|m| m.iter())
            .filter_map(|(k, v)| parse_log_entry(k, v))
    }

    /// Number of entries that could not be read as `(hour, status)`.
    fn invalid_count(&self) -> usize {
        match self {
            LogShape::Nested(_) => self
                .map()
                .map(|m| m.iter().filter(|(k, v)| parse_log_entry(k, v).is_none()).count())
                .unwrap_or(0),
            // a flat record also carries non-log fields
            LogShape::Flat(_) | LogShape::Missing => 0,
        }
    }
}

fn parse_log_entry(key: &str, value: &Value) -> Option<(u8, WorkStatus)> {
    // canonical decimal keys only: "09" or "+9" would collide with "9"
    let hour: u8 = key.parse().ok()?;
    if hour >= HOURS_PER_DAY || hour.to_string() != key {
        return None;
    }
    let status = WorkStatus::from_db_str(value.as_str()?)?;
    Some((hour, status))
}

/// What a migration pass changed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MigrationReport {
    pub records: usize,
    pub configs_defaulted: usize,
    pub configs_upgraded: usize,
    pub ranges_repaired: usize,
    pub todos_filled: usize,
    pub entries_dropped: usize,
}

impl MigrationReport {
    pub fn changed_anything(&self) -> bool {
        self.configs_defaulted > 0
            || self.configs_upgraded > 0
            || self.ranges_repaired > 0
            || self.todos_filled > 0
            || self.entries_dropped > 0
    }
}

/// Parse the persisted JSON payload and migrate it.
/// Unparseable payloads fail the whole load.
pub fn parse_store(text: &str) -> AppResult<AppData> {
    parse_store_with_report(text).map(|(data, _)| data)
}

pub fn parse_store_with_report(text: &str) -> AppResult<(AppData, MigrationReport)> {
    let value: Value = serde_json::from_str(text)
        .map_err(|e| AppError::Store(format!("unparseable payload: {e}")))?;

    match value {
        Value::Object(map) => Ok(migrate_with_report(&map)),
        other => Err(AppError::Store(format!(
            "expected a JSON object keyed by date, found {}",
            json_kind(&other)
        ))),
    }
}

pub fn migrate(raw: &Map<String, Value>) -> AppData {
    migrate_with_report(raw).0
}

pub fn migrate_with_report(raw: &Map<String, Value>) -> (AppData, MigrationReport) {
    let mut report = MigrationReport::default();
    let mut data = AppData::new();

    for (date, item) in raw {
        let record = migrate_record(item, &mut report);
        data.insert(date.clone(), record);
        report.records += 1;
    }

    (data, report)
}

fn migrate_record(item: &Value, report: &mut MigrationReport) -> DayRecord {
    let fields = item.as_object();

    let shape = LogShape::resolve(item);
    let log: DayLog = shape.entries().collect();
    report.entries_dropped += shape.invalid_count();

    let todos = migrate_todos(fields.and_then(|f| f.get("todos")), report);
    let config = migrate_config(fields.and_then(|f| f.get("config")), report);

    DayRecord { log, todos, config }
}

fn migrate_config(raw: Option<&Value>, report: &mut MigrationReport) -> DayConfig {
    let Some(cfg) = raw.and_then(Value::as_object) else {
        report.configs_defaulted += 1;
        return DayConfig::default();
    };

    if cfg.contains_key("sleep") && !cfg.contains_key("sleep1") {
        report.configs_upgraded += 1;
        return DayConfig {
            sleep1: range_or(cfg.get("sleep"), DEFAULT_SLEEP1, report),
            sleep2: DEFAULT_SLEEP2,
            out: cfg
                .get("out")
                .map(|v| range_or(Some(v), DEFAULT_OUT, report))
                .unwrap_or(DEFAULT_OUT),
        };
    }

    DayConfig {
        sleep1: range_or(cfg.get("sleep1"), DEFAULT_SLEEP1, report),
        sleep2: range_or(cfg.get("sleep2"), DEFAULT_SLEEP2, report),
        out: range_or(cfg.get("out"), DEFAULT_OUT, report),
    }
}

fn range_or(raw: Option<&Value>, fallback: TimeRange, report: &mut MigrationReport) -> TimeRange {
    match raw.and_then(parse_range) {
        Some(r) => r,
        None => {
            report.ranges_repaired += 1;
            fallback
        }
    }
}

fn parse_range(v: &Value) -> Option<TimeRange> {
    let hour = |key: &str| -> Option<u8> {
        let h = v.get(key)?.as_u64()?;
        (h < HOURS_PER_DAY as u64).then_some(h as u8)
    };

    Some(TimeRange {
        start: hour("start")?,
        end: hour("end")?,
        enabled: v.get("enabled")?.as_bool()?,
    })
}

fn migrate_todos(raw: Option<&Value>, report: &mut MigrationReport) -> TodoList {
    let items = raw.and_then(Value::as_array);

    let mut filled = false;
    let slots: [TodoItem; TODO_SLOTS] = std::array::from_fn(|i| {
        match items.and_then(|arr| arr.get(i)).and_then(|v| parse_todo(v, i)) {
            Some(todo) => todo,
            None => {
                filled = true;
                TodoItem::empty(i)
            }
        }
    });

    if filled {
        report.todos_filled += 1;
    }

    TodoList::from_slots(slots)
}

fn parse_todo(v: &Value, index: usize) -> Option<TodoItem> {
    let obj = v.as_object()?;
    Some(TodoItem {
        id: index as i64,
        text: obj
            .get("text")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        completed: obj
            .get("completed")
            .and_then(Value::as_bool)
            .unwrap_or(false),
    })
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
