use crate::cli::parser::Commands;
use crate::config::Config;
use crate::config::migrate::{migrate_config_file, missing_keys};
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{error, info, success, warning};
use rusqlite::Connection;
use std::path::Path;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        // ---- PRINT CONFIG ----
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", serde_yaml::to_string(cfg)?);
        }

        // ---- CHECK CONFIG ----
        if *check {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}: defaults are in use.",
                    path.display()
                ));
            } else {
                let missing = missing_keys(&path)?;
                if missing.is_empty() {
                    success("Configuration file is complete.");
                } else {
                    warning(format!(
                        "Missing fields: {} (run `dayflow config --migrate`)",
                        missing.join(", ")
                    ));
                }
            }
        }

        // ---- MIGRATE CONFIG ----
        if *migrate {
            if !path.exists() {
                warning(format!(
                    "No configuration file at {}: run `dayflow init` first.",
                    path.display()
                ));
            } else {
                let added = migrate_config_file(&path)?;
                if added.is_empty() {
                    info("Configuration already up to date.");
                } else {
                    audit_config_migration(&cfg.database, &added);
                }
            }
        }

        // ---- EDIT CONFIG ----
        if *edit_config {
            edit(&path, editor.clone());
        }
    }

    Ok(())
}

/// Record the config migration in the internal log, when a database exists.
fn audit_config_migration(database: &str, added: &[&str]) {
    if !Path::new(database).exists() {
        return;
    }

    let result = Connection::open(database)
        .map_err(AppError::from)
        .and_then(|conn| {
            run_pending_migrations(&conn)?;
            ttlog(
                &conn,
                "config_migrated",
                "config",
                &format!("Added fields: {}", added.join(", ")),
            )
        });

    if let Err(e) = result {
        warning(format!("Failed to write internal log: {}", e));
    }
}

fn edit(path: &Path, requested_editor: Option<String>) {
    let default_editor = std::env::var("EDITOR")
        .or_else(|_| std::env::var("VISUAL"))
        .unwrap_or_else(|_| {
            if cfg!(target_os = "windows") {
                "notepad".to_string()
            } else {
                "nano".to_string()
            }
        });

    let editor_to_use = requested_editor.unwrap_or_else(|| default_editor.clone());

    match Command::new(&editor_to_use).arg(path).status() {
        Ok(s) if s.success() => {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
        }
        Ok(_) | Err(_) => {
            warning(format!(
                "Editor '{}' not available, falling back to '{}'",
                editor_to_use, default_editor
            ));

            match Command::new(&default_editor).arg(path).status() {
                Ok(s) if s.success() => {
                    success(format!(
                        "Configuration file edited successfully using fallback '{}'",
                        default_editor
                    ));
                }
                Ok(_) | Err(_) => {
                    error(format!(
                        "Failed to edit configuration file using fallback '{}'",
                        default_editor
                    ));
                }
            }
        }
    }
}
