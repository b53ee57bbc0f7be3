use crate::core::filter::date_bounds;
use crate::errors::{AppError, AppResult};
use crate::models::TrackingEntry;
use crate::utils::date::{month_last_day, parse_entry_date};
use chrono::NaiveDate;

/// Parse a `--range` expression into inclusive bounds.
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let r = r.trim();

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let (start, end) = (start_raw.trim(), end_raw.trim());
        if start.len() != end.len() {
            return Err(range_error(r, "start and end must have the same format"));
        }
        let (d1, _) = period_bounds(start).ok_or_else(|| range_error(r, "invalid start"))?;
        let (_, d2) = period_bounds(end).ok_or_else(|| range_error(r, "invalid end"))?;
        return Ok((d1, d2));
    }

    period_bounds(r).ok_or_else(|| range_error(r, "unsupported format"))
}

/// First and last day of a year, a month or a single day.
fn period_bounds(p: &str) -> Option<(NaiveDate, NaiveDate)> {
    match p.len() {
        4 => {
            let y: i32 = p.parse().ok()?;
            Some((
                NaiveDate::from_ymd_opt(y, 1, 1)?,
                NaiveDate::from_ymd_opt(y, 12, 31)?,
            ))
        }
        7 => {
            let (y, m) = p.split_once('-')?;
            let y: i32 = y.parse().ok()?;
            let m: u32 = m.parse().ok()?;
            let last = month_last_day(y, m)?;
            Some((
                NaiveDate::from_ymd_opt(y, m, 1)?,
                NaiveDate::from_ymd_opt(y, m, last)?,
            ))
        }
        10 => {
            let d = NaiveDate::parse_from_str(p, "%Y-%m-%d").ok()?;
            Some((d, d))
        }
        _ => None,
    }
}

fn range_error(r: &str, why: &str) -> AppError {
    AppError::validation("range", format!("'{}': {}", r, why))
}

/// Work out the date window for a view.
///
/// `--range` gives the base window, `--from`/`--to` override either end,
/// and whatever is still missing falls back to the oldest/newest stored
/// entry. Returns `None` when nothing is stored and no bounds were given.
pub fn resolve_window(
    range: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
    entries: &[TrackingEntry],
) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let (mut start, mut end) = match range {
        Some(r) if !r.eq_ignore_ascii_case("all") => {
            let (s, e) = parse_range(r)?;
            (Some(s), Some(e))
        }
        _ => (None, None),
    };

    if let Some(f) = from {
        start = Some(parse_bound("from", f)?);
    }
    if let Some(t) = to {
        end = Some(parse_bound("to", t)?);
    }

    let fallback = date_bounds(entries);
    let start = start.or(fallback.map(|(s, _)| s));
    let end = end.or(fallback.map(|(_, e)| e));

    Ok(match (start, end) {
        (Some(s), Some(e)) => Some((s, e)),
        // one explicit bound and an empty store
        (Some(d), None) | (None, Some(d)) => Some((d, d)),
        (None, None) => None,
    })
}

fn parse_bound(field: &'static str, raw: &str) -> AppResult<NaiveDate> {
    parse_entry_date(raw)
        .ok_or_else(|| AppError::validation(field, format!("'{}' is not a valid date", raw)))
}
