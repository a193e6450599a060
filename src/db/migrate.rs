use crate::core::migrator::{MigrationReport, parse_store_with_report};
use crate::db::log::ttlog;
use crate::db::store::{read_payload, write_payload};
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log WHERE operation = 'migration_applied' AND target = ?1 LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Check if the `kv_store` table exists.
fn kv_store_table_exists(conn: &Connection) -> Result<bool> {
    let mut stmt =
        conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name='kv_store'")?;
    let exists: Option<String> = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Create the key/value table holding the serialized store.
fn migrate_create_kv_store(conn: &Connection) -> Result<()> {
    let version = "20250301_0001_create_kv_store";

    if kv_store_table_exists(conn)? {
        if !is_applied(conn, version)? {
            mark_applied(conn, version, "kv_store table already present")?;
        }
        return Ok(());
    }

    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv_store (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;

    mark_applied(conn, version, "Created kv_store table")?;
    success(format!("Migration applied: {} → created kv_store table", version));

    Ok(())
}

/// Public entry point: run all pending schema migrations.
///
/// Invoked by db::initialize::init_db() and on every store open.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_kv_store(conn)?;
    Ok(())
}

/// Upgrade every stored day record to the current shape and rewrite the
/// payload when something changed. Unparseable payloads are left untouched.
pub fn migrate_stored_records(conn: &Connection) -> AppResult<MigrationReport> {
    let Some(payload) = read_payload(conn)? else {
        info("No stored records: nothing to migrate.");
        return Ok(MigrationReport::default());
    };

    let (data, report) = match parse_store_with_report(&payload) {
        Ok(parsed) => parsed,
        Err(e) => {
            warning(format!("Stored payload cannot be migrated: {e}"));
            return Err(e);
        }
    };

    let rewritten = serde_json::to_string(&data)?;
    if report.changed_anything() || rewritten != payload {
        write_payload(conn, &rewritten)?;
        ttlog(
            conn,
            "migration_applied",
            "day_records",
            &format!(
                "{} records: {} configs defaulted, {} upgraded from 'sleep', {} ranges repaired, {} todo lists filled, {} log entries dropped",
                report.records,
                report.configs_defaulted,
                report.configs_upgraded,
                report.ranges_repaired,
                report.todos_filled,
                report.entries_dropped
            ),
        )?;
    }

    Ok(report)
}
