use crate::core::analytics::StatusCounts;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use crate::utils::date::parse_date;
use std::fs;

pub fn print_db_info(store: &DayStore) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let db_path = store.path();
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) STORED DAYS
    //
    let data = store.data();
    println!(
        "{}• Stored days:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        data.len(),
        RESET
    );

    //
    // 3) DATE RANGE
    //
    let first_date = data.keys().find(|k| parse_date(k).is_some()).cloned();
    let last_date = data.keys().rev().find(|k| parse_date(k).is_some()).cloned();

    let fmt_first = first_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date
        .clone()
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) RECORDED HOURS
    //
    let counts = StatusCounts::tally(data.values().flat_map(|r| r.log.statuses()));
    println!(
        "{}• Recorded hours:{} {} (slacking {}, working {}, focused {})",
        CYAN,
        RESET,
        counts.total(),
        counts.slacking,
        counts.normal,
        counts.focused
    );

    if !data.is_empty() {
        let avg = counts.total() as f64 / data.len() as f64;
        println!("{}• Average recorded hours/day:{} {:.2}", CYAN, RESET, avg);
    }

    println!();
    Ok(())
}
