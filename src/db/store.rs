//! Day-record store.
//!
//! The whole [`AppData`] map is kept as one JSON document under a single
//! key of the `kv_store` table. It is loaded (and migrated) once when the
//! store is opened and rewritten in full on every save.

use crate::core::migrator::parse_store_with_report;
use crate::db::log::ttlog;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::{AppData, DayRecord, date_key};
use crate::ui::messages::warning;
use chrono::{Local, NaiveDate};
use rusqlite::{Connection, OptionalExtension, params};
use serde_json::{Map, Value};

pub const STORE_KEY: &str = "workflow_app_data_v3";

/// Read the serialized store, if any.
pub fn read_payload(conn: &Connection) -> AppResult<Option<String>> {
    read_key(conn, STORE_KEY)
}

/// Replace the serialized store.
pub fn write_payload(conn: &Connection, payload: &str) -> AppResult<()> {
    write_key(conn, STORE_KEY, payload)
}

fn read_key(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let value = conn
        .query_row("SELECT value FROM kv_store WHERE key = ?1", [key], |row| {
            row.get::<_, String>(0)
        })
        .optional()?;
    Ok(value)
}

fn write_key(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, now],
    )?;
    Ok(())
}

pub struct DayStore {
    pool: DbPool,
    data: AppData,
}

impl DayStore {
    /// Open the database at `path`, apply schema migrations and load the store.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        run_pending_migrations(&pool.conn)?;
        let data = Self::load(&pool.conn)?;
        Ok(Self { pool, data })
    }

    /// Load and migrate the persisted store.
    /// An unreadable payload yields an empty store and is set aside under
    /// a separate key.
    fn load(conn: &Connection) -> AppResult<AppData> {
        let Some(payload) = read_payload(conn)? else {
            return Ok(AppData::new());
        };

        match parse_store_with_report(&payload) {
            Ok((data, report)) => {
                if report.entries_dropped > 0 {
                    warning(format!(
                        "Ignored {} invalid log entries while loading the store.",
                        report.entries_dropped
                    ));
                }
                Ok(data)
            }
            Err(e) => {
                warning(format!(
                    "Stored data is unreadable ({e}). Starting from an empty store."
                ));

                let aside = format!("{STORE_KEY}.corrupt.{}", Local::now().format("%Y%m%d%H%M%S"));
                write_key(conn, &aside, &payload)?;
                write_payload(conn, "{}")?;

                if let Err(log_err) = ttlog(
                    conn,
                    "store_load_failed",
                    &aside,
                    &format!("Unreadable store payload moved aside: {e}"),
                ) {
                    warning(format!("Failed to write internal log: {log_err}"));
                }

                Ok(AppData::new())
            }
        }
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }

    pub fn path(&self) -> &str {
        &self.pool.path
    }

    pub fn data(&self) -> &AppData {
        &self.data
    }

    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.data.contains_key(&date_key(date))
    }

    /// Stored record for `date`, or a fresh default one. Never persists.
    pub fn get_or_default(&self, date: &NaiveDate) -> DayRecord {
        self.data.get(&date_key(date)).cloned().unwrap_or_default()
    }

    /// Store `record` for `date` and rewrite the whole payload.
    pub fn save(&mut self, date: &NaiveDate, record: DayRecord) -> AppResult<()> {
        self.data.insert(date_key(date), record);
        self.persist()
    }

    fn persist(&self) -> AppResult<()> {
        let payload = serde_json::to_string(&self.data)?;
        write_payload(&self.pool.conn, &payload)
    }

    /// The stored payload as raw JSON, without migration.
    pub fn raw_payload(&self) -> AppResult<Option<Map<String, Value>>> {
        let Some(payload) = read_payload(&self.pool.conn)? else {
            return Ok(None);
        };

        match serde_json::from_str::<Value>(&payload) {
            Ok(Value::Object(map)) => Ok(Some(map)),
            Ok(_) => Err(AppError::Store(
                "stored payload is not a JSON object".to_string(),
            )),
            Err(e) => Err(AppError::Store(format!("unparseable payload: {e}"))),
        }
    }
}
