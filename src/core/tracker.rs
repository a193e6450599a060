use crate::db::log::ttlog;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::models::time_range::validate_hour;
use crate::models::{DayRecord, RangeKind, TimeRange, TodoItem, TodoPatch, WorkStatus, date_key};
use crate::ui::messages::warning;
use chrono::NaiveDate;

/// Mutations of a single day: every operation reads the record (or a
/// fresh default), applies the change and saves the whole store.
pub struct TrackerLogic;

fn audit(store: &DayStore, operation: &str, date: &NaiveDate, message: &str) {
    if let Err(e) = ttlog(store.conn(), operation, &date_key(date), message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

impl TrackerLogic {
    /// Record `status` for `hour`. EMPTY clears the hour.
    pub fn set_status(
        store: &mut DayStore,
        date: &NaiveDate,
        hour: u8,
        status: WorkStatus,
    ) -> AppResult<WorkStatus> {
        let hour = validate_hour(hour as i64)?;
        let mut record = store.get_or_default(date);
        record.log.set(hour, status)?;
        store.save(date, record)?;

        audit(
            store,
            "mark",
            date,
            &format!("{:02}:00 → {}", hour, status.to_db_str()),
        );

        Ok(status)
    }

    /// Select `status` for `hour`; selecting the status already set clears it.
    /// Returns the resulting status.
    pub fn toggle_status(
        store: &mut DayStore,
        date: &NaiveDate,
        hour: u8,
        status: WorkStatus,
    ) -> AppResult<WorkStatus> {
        let hour = validate_hour(hour as i64)?;
        let current = store.get_or_default(date).log.status_at(hour);
        let next = if current == status {
            WorkStatus::Empty
        } else {
            status
        };
        Self::set_status(store, date, hour, next)
    }

    /// Merge `patch` into todo slot `index` (0-4).
    pub fn update_todo(
        store: &mut DayStore,
        date: &NaiveDate,
        index: usize,
        patch: TodoPatch,
    ) -> AppResult<TodoItem> {
        let mut record = store.get_or_default(date);
        let updated = record.todos.apply(index, patch)?.clone();
        store.save(date, record)?;

        audit(
            store,
            "todo",
            date,
            &format!(
                "slot {} → '{}' ({})",
                index + 1,
                updated.text,
                if updated.completed { "done" } else { "open" }
            ),
        );

        Ok(updated)
    }

    /// Flip the completed flag of todo slot `index`.
    pub fn toggle_todo(store: &mut DayStore, date: &NaiveDate, index: usize) -> AppResult<TodoItem> {
        let completed = !store.get_or_default(date).todos.get(index)?.completed;
        Self::update_todo(
            store,
            date,
            index,
            TodoPatch {
                text: None,
                completed: Some(completed),
            },
        )
    }

    /// Update the bounds of one inactive range. `None` keeps a bound.
    pub fn update_range(
        store: &mut DayStore,
        date: &NaiveDate,
        kind: RangeKind,
        start: Option<u8>,
        end: Option<u8>,
    ) -> AppResult<TimeRange> {
        let start = start.map(|h| validate_hour(h as i64)).transpose()?;
        let end = end.map(|h| validate_hour(h as i64)).transpose()?;

        let mut record = store.get_or_default(date);
        let range = record.config.get_mut(kind);
        if let Some(s) = start {
            range.start = s;
        }
        if let Some(e) = end {
            range.end = e;
        }
        let updated = *range;

        if updated.start == updated.end && updated.enabled {
            warning(format!(
                "{} starts and ends at {:02}:00: it covers no hours.",
                kind.as_str(),
                updated.start
            ));
        }

        Self::save_range(store, date, kind, record, updated)
    }

    /// Enable or disable one range. `None` toggles the current state.
    pub fn set_range_enabled(
        store: &mut DayStore,
        date: &NaiveDate,
        kind: RangeKind,
        enabled: Option<bool>,
    ) -> AppResult<TimeRange> {
        let mut record = store.get_or_default(date);
        let range = record.config.get_mut(kind);
        range.enabled = enabled.unwrap_or(!range.enabled);
        let updated = *range;

        Self::save_range(store, date, kind, record, updated)
    }

    fn save_range(
        store: &mut DayStore,
        date: &NaiveDate,
        kind: RangeKind,
        record: DayRecord,
        updated: TimeRange,
    ) -> AppResult<TimeRange> {
        store.save(date, record)?;

        audit(
            store,
            "range",
            date,
            &format!(
                "{} → {} ({})",
                kind.as_str(),
                updated.describe(),
                if updated.enabled { "enabled" } else { "disabled" }
            ),
        );

        Ok(updated)
    }
}

/// CLI todo index (1-5) → slot index (0-4).
pub fn todo_slot(cli_index: usize) -> AppResult<usize> {
    if (1..=crate::models::todo::TODO_SLOTS).contains(&cli_index) {
        Ok(cli_index - 1)
    } else {
        Err(AppError::InvalidTodoIndex(cli_index))
    }
}
