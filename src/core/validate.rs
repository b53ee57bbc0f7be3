//! Field checks applied to every candidate entry before it reaches a store.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::flag::parse_flag;
use crate::models::{EntryFields, EntryInput};
use crate::utils::date::parse_entry_date;
use crate::utils::time::{format_slot, parse_slot};
use chrono::NaiveTime;

/// Validates raw input against the configured names and time slots.
pub struct EntryValidator {
    names: Vec<String>,
    slots: Vec<NaiveTime>,
}

impl EntryValidator {
    pub fn new(names: Vec<String>, slots: Vec<NaiveTime>) -> Self {
        Self { names, slots }
    }

    pub fn from_config(cfg: &Config) -> AppResult<Self> {
        Ok(Self::new(cfg.names.clone(), cfg.slots()?))
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn slots(&self) -> &[NaiveTime] {
        &self.slots
    }

    /// Check `input` field by field; the first violation wins.
    pub fn validate(&self, input: &EntryInput) -> AppResult<EntryFields> {
        let name = input.name.trim();
        if !self.names.iter().any(|n| n == name) {
            return Err(AppError::validation(
                "name",
                format!("'{}' is not one of: {}", name, self.names.join(", ")),
            ));
        }

        let date = parse_entry_date(&input.date).ok_or_else(|| {
            AppError::validation("date", format!("'{}' is not a valid date", input.date))
        })?;

        let time = parse_slot(&input.time)
            .filter(|t| self.slots.contains(t))
            .ok_or_else(|| {
                AppError::validation(
                    "time",
                    format!(
                        "'{}' is not a valid slot ({} .. {})",
                        input.time,
                        self.slots.first().map(|t| format_slot(*t)).unwrap_or_default(),
                        self.slots.last().map(|t| format_slot(*t)).unwrap_or_default(),
                    ),
                )
            })?;

        Ok(EntryFields {
            name: name.to_string(),
            date,
            time,
            started: coerce_flag("started", input.started.as_deref())?,
            scheduled_tx: coerce_flag("scheduled_tx", input.scheduled_tx.as_deref())?,
            same_day_srp: coerce_flag("same_day_srp", input.same_day_srp.as_deref())?,
            note: input.note.clone().unwrap_or_default(),
        })
    }
}

fn coerce_flag(field: &'static str, raw: Option<&str>) -> AppResult<bool> {
    match raw {
        None => Ok(false),
        Some(s) => parse_flag(s).ok_or_else(|| {
            AppError::validation(field, format!("'{}' is not a yes/no value", s))
        }),
    }
}
