//! Checkbox statistics over a filtered set of entries.
//!
//! Two views are produced together in one pass:
//! - per person, how many entries had each flag set / not set;
//! - per flag, how many entries had it set, grouped by person.

use crate::models::{FlagField, TrackingEntry};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Name of the stand-in row emitted when a flag is never set.
pub const NO_DATA: &str = "No Data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueCount {
    pub value: bool,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldRate {
    pub field: FlagField,
    pub label: &'static str,
    pub rows: Vec<ValueCount>,
}

impl FieldRate {
    pub fn count(&self, value: bool) -> Option<usize> {
        self.rows.iter().find(|r| r.value == value).map(|r| r.count)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PersonRates {
    pub name: String,
    pub total: usize,
    pub fields: Vec<FieldRate>,
}

impl PersonRates {
    pub fn field(&self, field: FlagField) -> Option<&FieldRate> {
        self.fields.iter().find(|f| f.field == field)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NameCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldTotals {
    pub field: FlagField,
    pub label: &'static str,
    pub rows: Vec<NameCount>,
    /// True when `rows` is the single `NO_DATA` stand-in rather than data.
    pub placeholder: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub entries: usize,
    pub per_person: Vec<PersonRates>,
    pub overall: Vec<FieldTotals>,
}

impl Report {
    pub fn person(&self, name: &str) -> Option<&PersonRates> {
        self.per_person.iter().find(|p| p.name == name)
    }

    pub fn overall_for(&self, field: FlagField) -> Option<&FieldTotals> {
        self.overall.iter().find(|t| t.field == field)
    }
}

/// `[field][0 = false, 1 = true]`
type FlagTally = [[usize; 2]; 3];

pub fn build_report(entries: &[TrackingEntry]) -> Report {
    let mut order: Vec<(String, FlagTally)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut yes_by_name: [BTreeMap<&str, usize>; 3] = Default::default();

    for e in entries {
        let slot = *index.entry(e.name.as_str()).or_insert_with(|| {
            order.push((e.name.clone(), FlagTally::default()));
            order.len() - 1
        });

        for (fi, field) in FlagField::ALL.iter().enumerate() {
            let v = field.value_of(e);
            order[slot].1[fi][usize::from(v)] += 1;
            if v {
                *yes_by_name[fi].entry(e.name.as_str()).or_insert(0) += 1;
            }
        }
    }

    let per_person = order
        .into_iter()
        .map(|(name, tally)| PersonRates {
            total: tally[0][0] + tally[0][1],
            name,
            fields: FlagField::ALL
                .iter()
                .zip(tally.iter())
                .map(|(field, counts)| FieldRate {
                    field: *field,
                    label: field.label(),
                    rows: value_rows(counts),
                })
                .collect(),
        })
        .collect();

    let overall = FlagField::ALL
        .iter()
        .zip(yes_by_name.iter())
        .map(|(field, by_name)| {
            let placeholder = by_name.is_empty();
            let rows = if placeholder {
                vec![NameCount {
                    name: NO_DATA.to_string(),
                    count: 1,
                }]
            } else {
                by_name
                    .iter()
                    .map(|(name, count)| NameCount {
                        name: name.to_string(),
                        count: *count,
                    })
                    .collect()
            };
            FieldTotals {
                field: *field,
                label: field.label(),
                rows,
                placeholder,
            }
        })
        .collect();

    Report {
        entries: entries.len(),
        per_person,
        overall,
    }
}

/// Non-zero counts only, most frequent first, `true` first on ties.
fn value_rows(counts: &[usize; 2]) -> Vec<ValueCount> {
    let mut rows: Vec<ValueCount> = [true, false]
        .into_iter()
        .map(|value| ValueCount {
            value,
            count: counts[usize::from(value)],
        })
        .filter(|r| r.count > 0)
        .collect();
    rows.sort_by(|a, b| b.count.cmp(&a.count));
    rows
}

pub fn per_person_rates(entries: &[TrackingEntry]) -> Vec<PersonRates> {
    build_report(entries).per_person
}

pub fn overall_true_counts(entries: &[TrackingEntry]) -> Vec<FieldTotals> {
    build_report(entries).overall
}
