use crate::errors::{AppError, AppResult};
use crate::models::AppData;
use crate::ui::messages::{info, success, warning};
use crate::utils::date::{file_stamp, today};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub struct ExportLogic;

impl ExportLogic {
    /// `workflow_backup_YYYYMMDD.json` for today.
    pub fn default_file_name() -> String {
        format!("workflow_backup_{}.json", file_stamp(&today()))
    }

    /// Destination path: `file` when given, otherwise the default file
    /// name inside `export_dir`.
    pub fn resolve_path(file: Option<&str>, export_dir: &str) -> PathBuf {
        match file {
            Some(f) => expand_tilde(f),
            None => expand_tilde(export_dir).join(Self::default_file_name()),
        }
    }

    /// Pretty-printed JSON of the whole store.
    pub fn to_json(data: &AppData) -> AppResult<String> {
        serde_json::to_string_pretty(data)
            .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))
    }

    /// Write the whole store to `path`.
    pub fn export(data: &AppData, path: &Path, force: bool) -> AppResult<()> {
        ensure_writable(path, force)?;

        if data.is_empty() {
            warning("The store is empty: exporting an empty document.");
        }

        let json = Self::to_json(data)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let mut file = fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        success(format!(
            "Exported {} days to {}",
            data.len(),
            path.display()
        ));
        Ok(())
    }
}

/// Existing files are only replaced with `force` or an explicit `y`.
fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".to_string(),
        ))
    }
}
