use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One stored tracking event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingEntry {
    pub id: i64,
    pub name: String,        // ⇔ tracking.name (one of Config::names)
    pub date: NaiveDate,     // ⇔ tracking.date (TEXT "YYYY-MM-DD")
    #[serde(serialize_with = "serialize_slot")]
    pub time: NaiveTime,     // ⇔ tracking.time (TEXT "08:00 AM")
    pub started: bool,       // ⇔ tracking.started (0/1)
    pub scheduled_tx: bool,  // ⇔ tracking.scheduled_tx (0/1)
    pub same_day_srp: bool,  // ⇔ tracking.same_day_srp (0/1)
    pub note: String,        // ⇔ tracking.note (TEXT, default '')
}

/// Every mutable column of an entry, already validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryFields {
    pub name: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub started: bool,
    pub scheduled_tx: bool,
    pub same_day_srp: bool,
    pub note: String,
}

/// Raw, unvalidated values as typed on the command line or read from an
/// imported CSV row. `None` flags mean "unchecked"; a missing column reads
/// as empty and is rejected by validation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EntryInput {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub started: Option<String>,
    #[serde(default, alias = "typetx", alias = "typeTx")]
    pub scheduled_tx: Option<String>,
    #[serde(default, alias = "typesrp", alias = "typeSRP")]
    pub same_day_srp: Option<String>,
    #[serde(default)]
    pub note: Option<String>,
}

impl TrackingEntry {
    pub fn from_fields(id: i64, fields: EntryFields) -> Self {
        Self {
            id,
            name: fields.name,
            date: fields.date,
            time: fields.time,
            started: fields.started,
            scheduled_tx: fields.scheduled_tx,
            same_day_srp: fields.same_day_srp,
            note: fields.note,
        }
    }

    pub fn fields(&self) -> EntryFields {
        EntryFields {
            name: self.name.clone(),
            date: self.date,
            time: self.time,
            started: self.started,
            scheduled_tx: self.scheduled_tx,
            same_day_srp: self.same_day_srp,
            note: self.note.clone(),
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn time_str(&self) -> String {
        crate::utils::time::format_slot(self.time)
    }

    /// Turn the stored record back into raw input, so a partial edit can
    /// overlay only the fields the user supplied and revalidate the rest.
    pub fn to_input(&self) -> EntryInput {
        EntryInput {
            name: self.name.clone(),
            date: self.date_str(),
            time: self.time_str(),
            started: Some(self.started.to_string()),
            scheduled_tx: Some(self.scheduled_tx.to_string()),
            same_day_srp: Some(self.same_day_srp.to_string()),
            note: Some(self.note.clone()),
        }
    }
}

fn serialize_slot<S: serde::Serializer>(t: &NaiveTime, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&crate::utils::time::format_slot(*t))
}
