use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::range::active_hours;
use crate::core::tracker::TrackerLogic;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::models::time_range::parse_hour;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Range {
        date,
        kind,
        start,
        end,
        enable,
        disable,
        toggle,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start = start.as_deref().map(parse_hour).transpose()?;
        let end = end.as_deref().map(parse_hour).transpose()?;

        let switch = if *enable {
            Some(Some(true))
        } else if *disable {
            Some(Some(false))
        } else if *toggle {
            Some(None)
        } else {
            None
        };

        if start.is_none() && end.is_none() && switch.is_none() {
            info("Nothing to change: use --start, --end, --enable, --disable or --toggle.");
            return Ok(());
        }

        let mut store = DayStore::open(&cfg.database)?;

        let mut range = *store.get_or_default(&d).config.get(*kind);
        if start.is_some() || end.is_some() {
            range = TrackerLogic::update_range(&mut store, &d, *kind, start, end)?;
        }
        if let Some(enabled) = switch {
            range = TrackerLogic::set_range_enabled(&mut store, &d, *kind, enabled)?;
        }

        success(format!(
            "{} {}: {} ({})",
            d,
            kind.label(),
            range.describe(),
            if range.enabled { "enabled" } else { "disabled" }
        ));

        let active = active_hours(&store.get_or_default(&d).config);
        info(format!("{} active hours for {}.", active.len(), d));
    }

    Ok(())
}
