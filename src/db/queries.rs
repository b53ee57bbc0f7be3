use crate::errors::AppError;
use crate::models::flag::{flag_to_db, parse_flag};
use crate::models::{EntryFields, TrackingEntry};
use crate::utils::date::parse_entry_date;
use crate::utils::time::{format_slot, parse_slot};
use chrono::Local;
use rusqlite::types::{Type, ValueRef};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const SELECT_ENTRY: &str = "SELECT id, name, date, time, started, scheduled_tx, same_day_srp, note
     FROM tracking";

pub fn insert_entry(conn: &Connection, fields: &EntryFields) -> Result<i64> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO tracking (name, date, time, started, scheduled_tx, same_day_srp, note, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )?;

    stmt.execute(params![
        fields.name,
        fields.date.format("%Y-%m-%d").to_string(),
        format_slot(fields.time),
        flag_to_db(fields.started),
        flag_to_db(fields.scheduled_tx),
        flag_to_db(fields.same_day_srp),
        fields.note,
        Local::now().to_rfc3339(),
    ])?;

    Ok(conn.last_insert_rowid())
}

/// Replace every mutable column. Returns the number of rows touched.
pub fn update_entry(conn: &Connection, id: i64, fields: &EntryFields) -> Result<usize> {
    let mut stmt = conn.prepare_cached(
        "UPDATE tracking
         SET name = ?1, date = ?2, time = ?3, started = ?4,
             scheduled_tx = ?5, same_day_srp = ?6, note = ?7
         WHERE id = ?8",
    )?;

    stmt.execute(params![
        fields.name,
        fields.date.format("%Y-%m-%d").to_string(),
        format_slot(fields.time),
        flag_to_db(fields.started),
        flag_to_db(fields.scheduled_tx),
        flag_to_db(fields.same_day_srp),
        fields.note,
        id,
    ])
}

/// Returns the number of rows removed.
pub fn delete_entry(conn: &Connection, id: i64) -> Result<usize> {
    conn.execute("DELETE FROM tracking WHERE id = ?1", [id])
}

pub fn load_all_entries(conn: &Connection) -> Result<Vec<TrackingEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRY} ORDER BY id ASC"))?;
    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_entry(conn: &Connection, id: i64) -> Result<Option<TrackingEntry>> {
    let mut stmt = conn.prepare_cached(&format!("{SELECT_ENTRY} WHERE id = ?1"))?;
    stmt.query_row([id], map_row).optional()
}

pub fn map_row(row: &Row) -> Result<TrackingEntry> {
    let date_str: String = row.get("date")?;
    let date = parse_entry_date(&date_str)
        .ok_or_else(|| conversion_error(2, AppError::validation("date", date_str.clone())))?;

    let time_str: String = row.get("time")?;
    let time = parse_slot(&time_str)
        .ok_or_else(|| conversion_error(3, AppError::validation("time", time_str.clone())))?;

    let note: Option<String> = row.get("note")?;

    Ok(TrackingEntry {
        id: row.get("id")?,
        name: row.get("name")?,
        date,
        time,
        started: read_flag(row, 4, "started")?,
        scheduled_tx: read_flag(row, 5, "scheduled_tx")?,
        same_day_srp: read_flag(row, 6, "same_day_srp")?,
        note: note.unwrap_or_default(),
    })
}

/// Booleans may have been stored as integers, reals or text depending on
/// which tool wrote the row.
fn read_flag(row: &Row, idx: usize, field: &'static str) -> Result<bool> {
    match row.get_ref(idx)? {
        ValueRef::Null => Ok(false),
        ValueRef::Integer(i) => Ok(i != 0),
        ValueRef::Real(f) => Ok(f != 0.0),
        ValueRef::Text(bytes) => {
            let s = String::from_utf8_lossy(bytes);
            parse_flag(&s).ok_or_else(|| {
                conversion_error(idx, AppError::validation(field, format!("'{}'", s)))
            })
        }
        ValueRef::Blob(_) => Err(rusqlite::Error::InvalidColumnType(
            idx,
            field.to_string(),
            Type::Blob,
        )),
    }
}

fn conversion_error(idx: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(err))
}
