use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::analytics::{MAX_TREND_DAYS, TrendPoint, compute_trend, compute_trend_raw};
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::header;
use crate::utils::colors::{BLUE, GREEN, RED, RESET};
use crate::utils::date;
use crate::utils::formatting::bar;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Trend { date: d, days, raw } = cmd {
        let center = date::parse_date_or_today(d.as_deref())?;
        let days = days.unwrap_or(cfg.trend_days);
        if days > MAX_TREND_DAYS {
            return Err(AppError::Config(format!(
                "trend_days must be at most {}, found {}",
                MAX_TREND_DAYS, days
            )));
        }

        let store = DayStore::open(&cfg.database)?;

        let points = if *raw {
            let payload = store.raw_payload()?.unwrap_or_default();
            compute_trend_raw(&payload, center, days)
        } else {
            compute_trend(store.data(), center, days)
        };

        header(format!("Trend: {} days ending {}", points.len(), center));
        println!("{}", render(&points));
    }

    Ok(())
}

fn render(points: &[TrendPoint]) -> String {
    let mut table = Table::new(vec![
        Column::new("DATE", 5),
        Column::new("SLACK", 5),
        Column::new("WORK", 4),
        Column::new("FOCUS", 5),
        Column::new("", 0),
    ]);

    for p in points {
        let label = date::parse_date(&p.date)
            .map(|d| date::short_label(&d))
            .unwrap_or_else(|| p.date.clone());

        table.add_row(vec![
            label,
            p.slacking.to_string(),
            p.normal.to_string(),
            p.focused.to_string(),
            format!(
                "{GREEN}{}{BLUE}{}{RED}{}{RESET}",
                bar(p.slacking, '▒'),
                bar(p.normal, '▓'),
                bar(p.focused, '█')
            ),
        ]);
    }

    table.render()
}
