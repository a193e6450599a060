use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::{TrackerLogic, todo_slot};
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::models::TodoPatch;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Todo {
        date,
        index,
        text,
        done,
        undone,
        toggle,
    } = cmd
    {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let slot = todo_slot(*index)?;

        let completed = if *done {
            Some(true)
        } else if *undone {
            Some(false)
        } else {
            None
        };

        if text.is_none() && completed.is_none() && !*toggle {
            info("Nothing to change: use --text, --done, --undone or --toggle.");
            return Ok(());
        }

        let mut store = DayStore::open(&cfg.database)?;

        let mut item = store.get_or_default(&d).todos.get(slot)?.clone();
        if text.is_some() || completed.is_some() {
            item = TrackerLogic::update_todo(
                &mut store,
                &d,
                slot,
                TodoPatch {
                    text: text.clone(),
                    completed,
                },
            )?;
        }
        if *toggle {
            item = TrackerLogic::toggle_todo(&mut store, &d, slot)?;
        }

        let mark = if item.completed { "☑" } else { "☐" };
        success(format!(
            "{} todo {}: {} {}",
            d,
            index,
            mark,
            if item.is_blank() { "(empty)" } else { item.text.as_str() }
        ));
    }

    Ok(())
}
