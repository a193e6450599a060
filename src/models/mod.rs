pub mod day_config;
pub mod day_log;
pub mod day_record;
pub mod time_range;
pub mod todo;
pub mod work_status;

pub use day_config::{DayConfig, RangeKind};
pub use day_log::DayLog;
pub use day_record::{AppData, DayRecord, date_key};
pub use time_range::TimeRange;
pub use todo::{TodoItem, TodoList, TodoPatch};
pub use work_status::WorkStatus;
