// src/export/model.rs

use crate::models::TrackingEntry;
use serde::Serialize;

/// Flat row written by every export format. Flags are 0/1, matching the
/// column layout of the tracking spreadsheet.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: i64,
    pub name: String,
    pub date: String,
    pub time: String,
    pub started: u8,
    pub scheduled_tx: u8,
    pub same_day_srp: u8,
    pub note: String,
}

impl From<&TrackingEntry> for EntryExport {
    fn from(e: &TrackingEntry) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            date: e.date_str(),
            time: e.time_str(),
            started: u8::from(e.started),
            scheduled_tx: u8::from(e.scheduled_tx),
            same_day_srp: u8::from(e.same_day_srp),
            note: e.note.clone(),
        }
    }
}

/// Header for CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "name",
        "date",
        "time",
        "started",
        "scheduled_tx",
        "same_day_srp",
        "note",
    ]
}

pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.to_string(),
        e.name.clone(),
        e.date.clone(),
        e.time.clone(),
        e.started.to_string(),
        e.scheduled_tx.to_string(),
        e.same_day_srp.to_string(),
        e.note.clone(),
    ]
}
