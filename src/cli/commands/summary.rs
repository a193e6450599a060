use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::summary::{GeminiSummarizer, SummaryOutcome, daily_analysis};
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::models::date_key;
use crate::ui::messages::{header, warning};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Summary { date: d } = cmd {
        let d = date::parse_date_or_today(d.as_deref())?;
        let store = DayStore::open(&cfg.database)?;
        let record = store.get_or_default(&d);

        header(format!("Daily review {}", d));

        // no network client at all for an empty day
        let outcome = if !record.log.has_records() {
            SummaryOutcome::NoData
        } else {
            match GeminiSummarizer::from_config(cfg) {
                Ok(summarizer) => daily_analysis(&date_key(&d), &record.log, &summarizer),
                Err(e) => {
                    warning(e);
                    SummaryOutcome::Unavailable
                }
            }
        };

        println!("{}", outcome.message());
    }

    Ok(())
}
