use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::migrate::run_pending_migrations;
use crate::db::pool::DbPool;
use crate::db::stats;
use crate::errors::{AppError, AppResult};
use rusqlite::Connection;
use ansi_term::Colour::{Cyan, Green, Red};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Db {
        migrate,
        check,
        vacuum,
        info,
    } = cmd
    {
        // opened directly so --migrate really is the first thing to touch the schema
        let mut pool = DbPool::new(&cfg.database)?;

        if *migrate {
            println!("{}", Cyan.paint("▶ Running migrations…"));
            run_pending_migrations(&pool.conn)?;
            println!("{}\n", Green.paint("✔ Migration completed."));
        }

        if *info {
            run_pending_migrations(&pool.conn)?;
            stats::print_db_info(&mut pool, &cfg.database)?;
        }

        if *check {
            println!("{}", Cyan.paint("▶ Running integrity check…"));

            let problems = integrity_problems(&pool.conn)?;

            if problems.is_empty() {
                println!("{}\n", Green.paint("✔ Integrity check passed."));
            } else {
                println!("{}", Red.paint("✘ Integrity check failed:"));
                for p in &problems {
                    println!("    {}", p);
                }
                return Err(AppError::Integrity(problems.join("; ")));
            }
        }

        if *vacuum {
            println!("{}", Cyan.paint("▶ Running VACUUM…"));
            pool.with_conn(|c| c.execute_batch("VACUUM;"))?;
            println!("{}\n", Green.paint("✔ Vacuum completed."));
        }
    }

    Ok(())
}

/// Every line reported by `PRAGMA integrity_check` other than the single `ok`.
fn integrity_problems(conn: &Connection) -> AppResult<Vec<String>> {
    let mut stmt = conn.prepare("PRAGMA integrity_check;")?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(0))?;

    let mut problems = Vec::new();
    for r in rows {
        let line = r?;
        if line != "ok" {
            problems.push(line);
        }
    }
    Ok(problems)
}
