use crate::models::TrackingEntry;
use chrono::NaiveDate;

/// Entries with `start <= date <= end` (and `name == person` when given),
/// newest date first.
///
/// An inverted range yields nothing. Same-date entries keep their input
/// order.
pub fn filter(
    entries: &[TrackingEntry],
    start: NaiveDate,
    end: NaiveDate,
    person: Option<&str>,
) -> Vec<TrackingEntry> {
    if start > end {
        return Vec::new();
    }

    let mut out: Vec<TrackingEntry> = entries
        .iter()
        .filter(|e| e.date >= start && e.date <= end)
        .filter(|e| person.is_none_or(|p| e.name == p))
        .cloned()
        .collect();

    // sort_by is stable
    out.sort_by(|a, b| b.date.cmp(&a.date));
    out
}

/// Earliest and latest date present, used as the default range.
pub fn date_bounds(entries: &[TrackingEntry]) -> Option<(NaiveDate, NaiveDate)> {
    let min = entries.iter().map(|e| e.date).min()?;
    let max = entries.iter().map(|e| e.date).max()?;
    Some((min, max))
}
