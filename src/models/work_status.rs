use serde::{Deserialize, Serialize};

/// Status recorded for one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkStatus {
    Slacking,
    Normal,
    Focused,
    Empty,
}

impl WorkStatus {
    /// Fixed score: SLACKING=0, NORMAL=1, FOCUSED=2. EMPTY is unscored.
    pub fn score(&self) -> Option<u32> {
        match self {
            WorkStatus::Slacking => Some(0),
            WorkStatus::Normal => Some(1),
            WorkStatus::Focused => Some(2),
            WorkStatus::Empty => None,
        }
    }

    pub fn is_recorded(&self) -> bool {
        !matches!(self, WorkStatus::Empty)
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkStatus::Slacking => "Slacking",
            WorkStatus::Normal => "Working",
            WorkStatus::Focused => "Focused",
            WorkStatus::Empty => "Not recorded",
        }
    }

    /// Convert enum → persisted string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            WorkStatus::Slacking => "SLACKING",
            WorkStatus::Normal => "NORMAL",
            WorkStatus::Focused => "FOCUSED",
            WorkStatus::Empty => "EMPTY",
        }
    }

    /// Convert persisted string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "SLACKING" => Some(WorkStatus::Slacking),
            "NORMAL" => Some(WorkStatus::Normal),
            "FOCUSED" => Some(WorkStatus::Focused),
            "EMPTY" => Some(WorkStatus::Empty),
            _ => None,
        }
    }

    /// Helper: convert input code from CLI (lowercase or uppercase, long or short)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "slacking" | "slack" | "s" => Some(WorkStatus::Slacking),
            "normal" | "work" | "n" | "w" => Some(WorkStatus::Normal),
            "focused" | "focus" | "f" => Some(WorkStatus::Focused),
            "empty" | "clear" | "e" => Some(WorkStatus::Empty),
            _ => None,
        }
    }
}
