use crate::models::day_config::DayConfig;
use crate::models::day_log::DayLog;
use crate::models::todo::TodoList;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Everything stored for one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    pub log: DayLog,
    pub todos: TodoList,
    pub config: DayConfig,
}

/// Date key (`yyyy-MM-dd`) → record. The whole persisted state.
pub type AppData = BTreeMap<String, DayRecord>;

/// Format a date as a store key.
pub fn date_key(date: &chrono::NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
