use super::entry::TrackingEntry;
use serde::Serialize;

/// The three checkbox columns of a tracking entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagField {
    Started,
    ScheduledTx,
    SameDaySrp,
}

impl FlagField {
    pub const ALL: [FlagField; 3] = [
        FlagField::Started,
        FlagField::ScheduledTx,
        FlagField::SameDaySrp,
    ];

    /// Column name in the `tracking` table.
    pub fn column(&self) -> &'static str {
        match self {
            FlagField::Started => "started",
            FlagField::ScheduledTx => "scheduled_tx",
            FlagField::SameDaySrp => "same_day_srp",
        }
    }

    /// Human label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            FlagField::Started => "Started Same Day",
            FlagField::ScheduledTx => "Scheduled Tx",
            FlagField::SameDaySrp => "Same Day SRP",
        }
    }

    pub fn value_of(&self, entry: &TrackingEntry) -> bool {
        match self {
            FlagField::Started => entry.started,
            FlagField::ScheduledTx => entry.scheduled_tx,
            FlagField::SameDaySrp => entry.same_day_srp,
        }
    }
}

/// Normalize the textual boolean spellings found across the old stores
/// (`1/0`, `true/false`, `TRUE/FALSE`, `yes/no`, ...).
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "t" | "yes" | "y" | "on" | "x" => Some(true),
        "0" | "false" | "f" | "no" | "n" | "off" | "" => Some(false),
        _ => None,
    }
}

pub fn flag_to_db(v: bool) -> i64 {
    if v { 1 } else { 0 }
}
