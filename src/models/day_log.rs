use crate::errors::AppResult;
use crate::models::time_range::validate_hour;
use crate::models::work_status::WorkStatus;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Hour (0-23) → status. An absent hour is an implicit EMPTY.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DayLog(BTreeMap<u8, WorkStatus>);

impl DayLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status_at(&self, hour: u8) -> WorkStatus {
        self.0.get(&hour).copied().unwrap_or(WorkStatus::Empty)
    }

    /// Set the status of one hour. EMPTY removes the entry.
    pub fn set(&mut self, hour: u8, status: WorkStatus) -> AppResult<()> {
        let hour = validate_hour(hour as i64)?;
        if status.is_recorded() {
            self.0.insert(hour, status);
        } else {
            self.0.remove(&hour);
        }
        Ok(())
    }

    /// Entries in ascending hour order, explicit EMPTY values included.
    pub fn entries(&self) -> impl Iterator<Item = (u8, WorkStatus)> + '_ {
        self.0.iter().map(|(h, s)| (*h, *s))
    }

    pub fn statuses(&self) -> impl Iterator<Item = WorkStatus> + '_ {
        self.0.values().copied()
    }

    pub fn has_records(&self) -> bool {
        self.0.values().any(WorkStatus::is_recorded)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(u8, WorkStatus)> for DayLog {
    fn from_iter<I: IntoIterator<Item = (u8, WorkStatus)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
