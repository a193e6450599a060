use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{DayStats, FocusLevel, RecordingProgress, compute_day_stats};
use crate::core::range::active_hours;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::models::todo::TODO_SLOTS;
use crate::models::{DayRecord, RangeKind};
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREY, RESET, color_for_score, colorize_status, dim_unless};
use crate::utils::date;
use crate::utils::formatting::{bold, pad_right};
use crate::utils::hour_label;
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { date: d, now } = cmd {
        let d = if *now {
            date::today()
        } else {
            date::parse_date_or_today(d.as_deref())?
        };

        let store = DayStore::open(&cfg.database)?;
        let record = store.get_or_default(&d);

        header(date::long_label(&d));
        if !store.contains(&d) {
            info("No record stored for this day yet: showing defaults.");
        }

        print_hours(&record);
        print_todos(&record);
        print_ranges(&record);

        let stats = compute_day_stats(&record.log);
        print_stats(&d, &stats, active_hours(&record.config).len());
    }

    Ok(())
}

fn print_hours(record: &DayRecord) {
    println!("\n{}", bold("Hours"));

    let active = active_hours(&record.config);
    if active.is_empty() {
        println!("  {GREY}Every hour of this day is inside an inactive range.{RESET}");
        return;
    }

    for h in active {
        println!(
            "  {}  {}",
            hour_label(h),
            colorize_status(record.log.status_at(h))
        );
    }
}

fn print_todos(record: &DayRecord) {
    println!(
        "\n{} ({}/{})",
        bold("Todos"),
        record.todos.completed_count(),
        TODO_SLOTS
    );

    for (i, t) in record.todos.iter().enumerate() {
        let mark = if t.completed { "☑" } else { "☐" };
        let text = if t.is_blank() { "-" } else { t.text.as_str() };
        println!("  {} {} {}", i + 1, mark, dim_unless(text, !t.completed));
    }
}

fn print_ranges(record: &DayRecord) {
    println!("\n{}", bold("Inactive ranges"));

    for kind in RangeKind::ALL {
        let r = record.config.get(kind);
        let line = format!(
            "  {} {} {}",
            pad_right(kind.as_str(), 7),
            r.describe(),
            if r.enabled { "" } else { "(off)" }
        );
        println!("{}", dim_unless(line.trim_end(), r.enabled));
    }
}

fn print_stats(d: &NaiveDate, stats: &DayStats, active_count: usize) {
    println!("\n{}", bold("Statistics"));

    let level = FocusLevel::from_score(stats.focus_score);
    println!(
        "  Focus score: {}{}{}  {}",
        color_for_score(stats.focus_score),
        stats.focus_score,
        RESET,
        level.label()
    );
    println!(
        "  Slacking: {} | Working: {} | Focused: {}",
        stats.slacking, stats.normal, stats.focused
    );

    let progress = RecordingProgress::new(stats, active_count);
    println!(
        "  Recorded {} of {} active hours ({}%), {} hours to record on {}",
        stats.total_recorded, active_count, progress.percent, progress.hours_to_record, d
    );
}
