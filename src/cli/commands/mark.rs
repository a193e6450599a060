use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::range::is_inactive;
use crate::core::tracker::TrackerLogic;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::models::WorkStatus;
use crate::models::time_range::parse_hour;
use crate::ui::messages::{success, warning};
use crate::utils::colors::colorize_status;
use crate::utils::date;
use crate::utils::hour_label;

/// Record the status of one hour.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Mark {
        date,
        hour,
        status,
        toggle,
    } = cmd
    {
        //
        // 1. Parse arguments
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let h = parse_hour(hour)?;
        let s = WorkStatus::from_code(status).ok_or_else(|| {
            AppError::InvalidStatus(format!(
                "'{}'. Use slacking (s), normal (n), focused (f) or empty (e)",
                status
            ))
        })?;

        //
        // 2. Open store
        //
        let mut store = DayStore::open(&cfg.database)?;

        if s.is_recorded() && is_inactive(h, &store.get_or_default(&d).config) {
            warning(format!(
                "{} falls inside an inactive range for {}.",
                hour_label(h),
                d
            ));
        }

        //
        // 3. Execute logic
        //
        let result = if *toggle {
            TrackerLogic::toggle_status(&mut store, &d, h, s)?
        } else {
            TrackerLogic::set_status(&mut store, &d, h, s)?
        };

        success(format!("{} {} → {}", d, hour_label(h), colorize_status(result)));
    }

    Ok(())
}
