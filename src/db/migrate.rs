use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
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

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([table], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    let mut out = Vec::new();
    for c in cols {
        out.push(c?);
    }
    Ok(out)
}

/// Create the `tracking` table with the current schema.
fn create_tracking_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tracking (
            id            INTEGER PRIMARY KEY AUTOINCREMENT,
            name          TEXT NOT NULL,
            date          TEXT NOT NULL,
            time          TEXT NOT NULL,
            started       INTEGER NOT NULL DEFAULT 0,
            scheduled_tx  INTEGER NOT NULL DEFAULT 0,
            same_day_srp  INTEGER NOT NULL DEFAULT 0,
            note          TEXT NOT NULL DEFAULT '',
            created_at    TEXT NOT NULL DEFAULT ''
        );
        "#,
    )?;
    Ok(())
}

fn ensure_indexes(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE INDEX IF NOT EXISTS idx_tracking_date ON tracking(date);
        CREATE INDEX IF NOT EXISTS idx_tracking_name_date ON tracking(name, date);
        "#,
    )?;
    Ok(())
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
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

/// Tables written by the spreadsheet-era tool used `typetx`/`typesrp` for
/// the two transaction flags. Rename them in place.
fn migrate_legacy_flag_columns(conn: &Connection) -> AppResult<()> {
    let version = "20240301_0002_rename_legacy_flag_columns";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    let cols = table_columns(conn, "tracking")?;
    let renames = [("typetx", "scheduled_tx"), ("typesrp", "same_day_srp")];

    let mut renamed = Vec::new();
    for (old, new) in renames {
        let has_old = cols.iter().any(|c| c.eq_ignore_ascii_case(old));
        let has_new = cols.iter().any(|c| c == new);

        if has_old && has_new {
            return Err(AppError::Migration(format!(
                "tracking has both '{}' and '{}' columns",
                old, new
            )));
        }

        if has_old {
            warning(format!("Renaming legacy column '{}' to '{}'...", old, new));
            conn.execute_batch(&format!(
                "ALTER TABLE tracking RENAME COLUMN {} TO {};",
                old, new
            ))?;
            renamed.push(format!("{} → {}", old, new));
        }
    }

    if renamed.is_empty() {
        return Ok(());
    }

    mark_applied(
        conn,
        version,
        &format!("Renamed legacy columns: {}", renamed.join(", ")),
    )?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Older local stores had no `note`/`created_at` columns.
fn migrate_add_missing_columns(conn: &Connection) -> AppResult<()> {
    let version = "20240301_0003_add_note_created_at";
    if migration_applied(conn, version)? {
        return Ok(());
    }

    let cols = table_columns(conn, "tracking")?;
    let mut added = Vec::new();

    for (col, ddl) in [
        ("note", "ALTER TABLE tracking ADD COLUMN note TEXT NOT NULL DEFAULT '';"),
        (
            "created_at",
            "ALTER TABLE tracking ADD COLUMN created_at TEXT NOT NULL DEFAULT '';",
        ),
    ] {
        if !cols.iter().any(|c| c == col) {
            conn.execute_batch(ddl)?;
            added.push(col);
        }
    }

    if added.is_empty() {
        return Ok(());
    }

    mark_applied(
        conn,
        version,
        &format!("Added columns to tracking: {}", added.join(", ")),
    )?;
    success(format!("Migration applied: {}", version));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and by `db --migrate`.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "tracking")? {
        create_tracking_table(conn)?;
    } else {
        migrate_legacy_flag_columns(conn)?;
        migrate_add_missing_columns(conn)?;
    }

    ensure_indexes(conn)?;
    Ok(())
}
