use crate::models::time_range::TimeRange;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

pub const DEFAULT_SLEEP1: TimeRange = TimeRange::new(23, 8, true);
/// Nap slot, disabled until the user turns it on.
pub const DEFAULT_SLEEP2: TimeRange = TimeRange::new(13, 14, false);
pub const DEFAULT_OUT: TimeRange = TimeRange::new(18, 19, true);

/// The three inactive ranges of a day, evaluated as a union.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayConfig {
    pub sleep1: TimeRange,
    pub sleep2: TimeRange,
    pub out: TimeRange,
}

impl Default for DayConfig {
    fn default() -> Self {
        Self {
            sleep1: DEFAULT_SLEEP1,
            sleep2: DEFAULT_SLEEP2,
            out: DEFAULT_OUT,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum RangeKind {
    Sleep1,
    Sleep2,
    Out,
}

impl RangeKind {
    pub const ALL: [RangeKind; 3] = [RangeKind::Sleep1, RangeKind::Sleep2, RangeKind::Out];

    pub fn as_str(&self) -> &'static str {
        match self {
            RangeKind::Sleep1 => "sleep1",
            RangeKind::Sleep2 => "sleep2",
            RangeKind::Out => "out",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RangeKind::Sleep1 => "Night sleep",
            RangeKind::Sleep2 => "Midday rest",
            RangeKind::Out => "Out / commute",
        }
    }
}

impl DayConfig {
    pub fn get(&self, kind: RangeKind) -> &TimeRange {
        match kind {
            RangeKind::Sleep1 => &self.sleep1,
            RangeKind::Sleep2 => &self.sleep2,
            RangeKind::Out => &self.out,
        }
    }

    pub fn get_mut(&mut self, kind: RangeKind) -> &mut TimeRange {
        match kind {
            RangeKind::Sleep1 => &mut self.sleep1,
            RangeKind::Sleep2 => &mut self.sleep2,
            RangeKind::Out => &mut self.out,
        }
    }

    pub fn ranges(&self) -> [&TimeRange; 3] {
        [&self.sleep1, &self.sleep2, &self.out]
    }
}
