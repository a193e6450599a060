use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::migrator::parse_store;
use crate::db::migrate::{migrate_stored_records, run_pending_migrations};
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::db::store::{DayStore, read_payload};
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, RED, RESET};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        //
        // 1) MIGRATE (SQL schema, then the stored payload)
        //
        if *migrate {
            let conn = rusqlite::Connection::open(&cfg.database)?;
            println!("{}▶ Running migrations…{}", CYAN, RESET);
            run_pending_migrations(&conn)?;

            let report = migrate_stored_records(&conn)?;
            println!(
                "  records: {} | configs defaulted: {} | upgraded from 'sleep': {} | ranges repaired: {} | todo lists filled: {} | log entries dropped: {}",
                report.records,
                report.configs_defaulted,
                report.configs_upgraded,
                report.ranges_repaired,
                report.todos_filled,
                report.entries_dropped
            );
            println!("{}✔ Migration completed.{}\n", GREEN, RESET);
        }

        if !(*info || *check || *vacuum) {
            return Ok(());
        }

        let pool = DbPool::new(&cfg.database)?;
        run_pending_migrations(&pool.conn)?;

        //
        // 2) CHECK (raw payload, never the fallback)
        //
        if *check {
            println!("{}▶ Running integrity check…{}", CYAN, RESET);

            let integrity: String = pool
                .conn
                .query_row("PRAGMA integrity_check;", [], |row| row.get(0))?;

            if integrity == "ok" {
                println!("{}✔ Integrity check passed.{}", GREEN, RESET);
            } else {
                println!("{}✘ Integrity check failed:{} {}", RED, RESET, integrity);
            }

            match read_payload(&pool.conn)? {
                None => println!("{}✔ No stored records yet.{}\n", GREEN, RESET),
                Some(payload) => match parse_store(&payload) {
                    Ok(data) => println!(
                        "{}✔ Stored payload is readable ({} days).{}\n",
                        GREEN,
                        data.len(),
                        RESET
                    ),
                    Err(e) => println!("{}✘ Stored payload is unreadable:{} {}\n", RED, RESET, e),
                },
            }
        }

        //
        // 3) VACUUM
        //
        if *vacuum {
            println!("{}▶ Running VACUUM…{}", CYAN, RESET);
            pool.conn.execute_batch("VACUUM;")?;
            println!("{}✔ Vacuum completed.{}\n", GREEN, RESET);
        }

        //
        // 4) INFO
        //
        if *info {
            let store = DayStore::from_pool(pool)?;
            stats::print_db_info(&store)?;
        }
    }

    Ok(())
}
