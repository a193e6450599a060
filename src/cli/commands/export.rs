use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::db::log::ttlog;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { file, force } = cmd {
        let store = DayStore::open(&cfg.database)?;
        let path = ExportLogic::resolve_path(file.as_deref(), &cfg.export_dir);

        ExportLogic::export(store.data(), &path, *force)?;

        if let Err(e) = ttlog(
            store.conn(),
            "export",
            &path.display().to_string(),
            &format!("{} days exported", store.data().len()),
        ) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
    Ok(())
}
